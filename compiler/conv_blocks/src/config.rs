//! Block lexer configuration: keyword spellings and allow-lists.

use rustc_hash::FxHashSet;

/// Commands accepted after `$` by default.
const DEFAULT_COMMANDS: [&str; 12] = [
    "print",
    "println",
    "printflush",
    "flush",
    "draw",
    "drawflush",
    "wait",
    "end",
    "sensor",
    "control",
    "read",
    "write",
];

/// Keywords that start statements the lexer does not recognize yet.
const DEFAULT_RESERVED: [&str; 6] = ["func", "while", "for", "return", "break", "continue"];

/// Configuration for [`BlockLexer`](crate::BlockLexer).
///
/// Keywords are compared literally against `Text` token values, so renaming
/// a keyword here renames it in the language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockLexerConfig {
    /// Introduces a declaring assignment.
    pub var_keyword: String,
    pub if_keyword: String,
    pub else_keyword: String,
    /// Statement keywords rejected as unsupported.
    pub reserved_keywords: FxHashSet<String>,
    /// Names allowed after the `$` sigil.
    pub commands: FxHashSet<String>,
    /// Blocks buffered between a spawned lexer and its consumer.
    pub capacity: usize,
    /// Color the token highlight in error diagnostics.
    pub colored_highlight: bool,
}

impl Default for BlockLexerConfig {
    fn default() -> Self {
        BlockLexerConfig {
            var_keyword: "var".to_string(),
            if_keyword: "if".to_string(),
            else_keyword: "else".to_string(),
            reserved_keywords: DEFAULT_RESERVED.iter().map(ToString::to_string).collect(),
            commands: DEFAULT_COMMANDS.iter().map(ToString::to_string).collect(),
            capacity: 2,
            colored_highlight: false,
        }
    }
}

impl BlockLexerConfig {
    /// Replace the command allow-list.
    #[must_use]
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// Add one command to the allow-list.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.commands.insert(command.into());
        self
    }

    #[must_use]
    pub fn with_reserved_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the handoff queue capacity used by
    /// [`BlockLexer::spawn`](crate::BlockLexer::spawn).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_colored_highlight(mut self, colored: bool) -> Self {
        self.colored_highlight = colored;
        self
    }

    #[inline]
    pub fn is_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    #[inline]
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_keywords.contains(word)
    }

    /// Sorted command names, for diagnostics.
    pub fn sorted_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
