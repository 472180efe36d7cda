//! Lexical tokens produced by the tokenizer.
//!
//! Token kinds are flat: keywords and identifiers are both [`TokenKind::Text`]
//! at this stage. Telling them apart is the block lexer's job, by literal
//! comparison against the configured keyword spellings.

use std::borrow::Cow;
use std::fmt;

use crate::{LineCol, Span};

/// Kind tag of a [`Token`].
///
/// Declaration order is the tokenizer's recognizer priority order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Line feed; statement boundary.
    Eol,
    /// `// ...` up to (not including) the line feed.
    Comment,
    /// Quoted string literal. The value excludes the quotes.
    String,
    /// Decimal, exponent or `0x` hexadecimal literal.
    Number,
    /// One of `+ - * / % = > < ! & |`.
    Operator,
    /// `,`
    Separator,
    /// `$name` command sigil. The value is the name without `$`.
    Command,
    /// `(`
    RoundL,
    /// `)`
    RoundR,
    /// `[`
    SquareL,
    /// `]`
    SquareR,
    /// `{`
    CurlyL,
    /// `}`
    CurlyR,
    /// Run of word characters: keywords and identifiers.
    Text,
    /// End-of-file sentinel, always the last token of a stream.
    Eof,
}

impl TokenKind {
    /// All kinds, in recognizer priority order.
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Eol,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Command,
        TokenKind::RoundL,
        TokenKind::RoundR,
        TokenKind::SquareL,
        TokenKind::SquareR,
        TokenKind::CurlyL,
        TokenKind::CurlyR,
        TokenKind::Text,
        TokenKind::Eof,
    ];

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eol => "EOL",
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Command => "Command",
            TokenKind::RoundL => "RoundL",
            TokenKind::RoundR => "RoundR",
            TokenKind::SquareL => "SquareL",
            TokenKind::SquareR => "SquareR",
            TokenKind::CurlyL => "CurlyL",
            TokenKind::CurlyR => "CurlyR",
            TokenKind::Text => "Text",
            TokenKind::Eof => "EOF",
        }
    }

    /// Value-shaped kinds: the operands of an assignment value.
    #[inline]
    pub fn is_value(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number | TokenKind::Text)
    }

    #[inline]
    pub fn is_open_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::RoundL | TokenKind::SquareL | TokenKind::CurlyL
        )
    }

    /// The closing bracket kind matching an opening one.
    ///
    /// Returns `None` for every kind that does not open a bracket.
    pub fn closing_bracket(self) -> Option<TokenKind> {
        match self {
            TokenKind::RoundL => Some(TokenKind::RoundR),
            TokenKind::SquareL => Some(TokenKind::SquareR),
            TokenKind::CurlyL => Some(TokenKind::CurlyR),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexical unit: kind, cooked value, and where it came from.
///
/// Equality compares every field, so two scans of the same source produce
/// equal token streams.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Cooked value. Empty for EOL and EOF.
    pub value: String,
    /// Code point range in the carriage-return-free source.
    pub span: Span,
    /// Line and column of the first code point.
    pub location: LineCol,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span, location: LineCol) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
            location,
        }
    }

    /// An EOF token positioned at `offset`.
    pub fn eof(offset: u32, location: LineCol) -> Self {
        Token::new(TokenKind::Eof, String::new(), Span::point(offset), location)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Check kind and literal text at once.
    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.value == text
    }

    /// Source-like spelling of the token.
    ///
    /// Strings are re-quoted with `"` (inner quotes escaped), commands get
    /// their `$` back and comments their `//`. EOL renders as a line feed and
    /// EOF as nothing.
    pub fn to_source(&self) -> Cow<'_, str> {
        match self.kind {
            TokenKind::String => Cow::Owned(quote_string(&self.value)),
            TokenKind::Command => Cow::Owned(format!("${}", self.value)),
            TokenKind::Comment => Cow::Owned(format!("//{}", self.value)),
            TokenKind::Eol => Cow::Borrowed("\n"),
            TokenKind::Eof => Cow::Borrowed(""),
            _ => Cow::Borrowed(&self.value),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

/// Wrap a cooked string value in double quotes.
///
/// Inverse of the tokenizer's cooking: every `\\` and `"` in the value is
/// escaped, so re-tokenizing the result yields the value unchanged.
fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
