//! Items and blocks: the output of the block lexer.

use std::fmt;

use conv_diagnostic::Diagnostic;
use conv_ir::{render_tokens, Span, Token};
use smallvec::SmallVec;

/// Label of an [`Item`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemKind {
    Keyword,
    Identifier,
    Operator,
    Value,
    /// Tokens between the parentheses of an `if`.
    Condition,
    /// Tokens between the braces of a statement body.
    Scope,
    /// The `$name` token of an instruction.
    Command,
    /// Tokens between the parentheses of a command call.
    Arguments,
    /// The selection the lexer was looking at when it failed.
    Error,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Keyword => "Keyword",
            ItemKind::Identifier => "Identifier",
            ItemKind::Operator => "Operator",
            ItemKind::Value => "Value",
            ItemKind::Condition => "Condition",
            ItemKind::Scope => "Scope",
            ItemKind::Command => "Command",
            ItemKind::Arguments => "Arguments",
            ItemKind::Error => "Error",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled, contiguous run of tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub tokens: Vec<Token>,
}

impl Item {
    pub fn new(kind: ItemKind, tokens: Vec<Token>) -> Self {
        Item { kind, tokens }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens rendered back to source-like text.
    pub fn text(&self) -> String {
        render_tokens(&self.tokens)
    }

    /// Span covering every token, or `None` for an empty item.
    pub fn span(&self) -> Option<Span> {
        let first = self.tokens.first()?;
        let last = self.tokens.last()?;
        Some(first.span.merge(last.span))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text())
    }
}

/// Label of a [`Block`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    /// `var x = ...` or `x = ...`
    Assignment,
    /// `if (...) { ... }`, `else { ... }`, `else if (...) { ... }`
    Statement,
    /// `$command(...)`
    Instruction,
    /// Terminal error sentinel. Always the last block of a run.
    Error,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Assignment => "Assignment",
            BlockKind::Statement => "Statement",
            BlockKind::Instruction => "Instruction",
            BlockKind::Error => "Error",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline capacity covers every block shape the lexer produces.
pub type Items = SmallVec<[Item; 4]>;

/// One recognized statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub kind: BlockKind,
    pub items: Items,
    /// Present exactly on error blocks.
    pub diagnostic: Option<Diagnostic>,
}

impl Block {
    pub fn new(kind: BlockKind, items: Items) -> Self {
        Block {
            kind,
            items,
            diagnostic: None,
        }
    }

    /// An error block holding the failing selection as one item.
    #[cold]
    pub fn error(selection: Item, diagnostic: Diagnostic) -> Self {
        let mut items = Items::new();
        items.push(selection);
        Block {
            kind: BlockKind::Error,
            items,
            diagnostic: Some(diagnostic),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == BlockKind::Error
    }

    /// First item of the given kind.
    pub fn item(&self, kind: ItemKind) -> Option<&Item> {
        self.items.iter().find(|item| item.kind == kind)
    }

    pub fn item_kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(|item| item.kind).collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.kind)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
