//! Structural errors raised by the block lexer.
//!
//! Every error records the cursor selection at the moment it was raised, so
//! the error block can show exactly which tokens the lexer was looking at.

use conv_diagnostic::{Diagnostic, ErrorCode};
use conv_ir::{LineCol, Span, Token, TokenKind};

use crate::Selection;

/// A structural error with the selection it was raised on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Token indices selected when the error was raised.
    pub selection: Selection,
    /// Code point span of the offending tokens.
    pub span: Span,
    pub location: LineCol,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `expect` read a token of the wrong kind.
    #[error("expected {} but found {}", expected_list(.expected), describe(.found))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: Token,
    },
    /// A token that cannot start a statement.
    #[error("expected a statement but found {}", describe(.found))]
    UnexpectedStatementStart { found: Token },
    /// An opening bracket ran to the end of input without its closer.
    #[error("unmatched {} in {context}", bracket(.open))]
    UnmatchedBracket {
        open: TokenKind,
        context: &'static str,
    },
    #[error("unknown command `${name}`")]
    UnknownCommand { name: String },
    /// A reserved keyword whose statement form is not implemented.
    #[error("`{keyword}` statements are not supported")]
    UnsupportedStatement { keyword: String },
    /// `backup` with nothing selected.
    #[error("cannot back up past the start of the selection")]
    BackupPastStart,
    /// `wrap_scope` called without an opening bracket behind the cursor.
    #[error("scope must start right after an opening bracket, found {}", describe(.found))]
    NoOpenBracket { found: Token },
}

impl LexErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnexpectedToken { .. } | LexErrorKind::UnexpectedStatementStart { .. } => {
                ErrorCode::E1001
            }
            LexErrorKind::UnmatchedBracket { .. } => ErrorCode::E1002,
            LexErrorKind::UnknownCommand { .. } => ErrorCode::E1003,
            LexErrorKind::UnsupportedStatement { .. } => ErrorCode::E1004,
            LexErrorKind::BackupPastStart | LexErrorKind::NoOpenBracket { .. } => ErrorCode::E9001,
        }
    }

    fn primary_label(&self) -> String {
        match self {
            LexErrorKind::UnexpectedToken { expected, .. } => {
                format!("expected {}", expected_list(expected))
            }
            LexErrorKind::UnexpectedStatementStart { .. } => "not a statement".to_string(),
            LexErrorKind::UnmatchedBracket { open, .. } => {
                format!("this {} is never closed", bracket(open))
            }
            LexErrorKind::UnknownCommand { .. } => "not a known command".to_string(),
            LexErrorKind::UnsupportedStatement { .. } => "unsupported statement".to_string(),
            LexErrorKind::BackupPastStart | LexErrorKind::NoOpenBracket { .. } => {
                "lexer stopped here".to_string()
            }
        }
    }
}

impl LexError {
    /// Convert into an error diagnostic.
    ///
    /// `highlight` is the token stream rendering with the selection marked;
    /// it becomes the first note.
    #[cold]
    pub fn to_diagnostic(&self, highlight: &str, commands: &[&str]) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.location, self.kind.primary_label())
            .with_note(highlight);

        match &self.kind {
            LexErrorKind::UnmatchedBracket { open, .. } => {
                if let Some(close) = open.closing_bracket() {
                    diag = diag.with_suggestion(format!("add the missing {}", bracket(&close)));
                }
            }
            LexErrorKind::UnknownCommand { .. } if !commands.is_empty() => {
                diag = diag.with_note(format!("known commands: {}", commands.join(", ")));
            }
            LexErrorKind::BackupPastStart | LexErrorKind::NoOpenBracket { .. } => {
                diag = diag.with_note("this is a bug in the block lexer");
            }
            _ => {}
        }

        diag
    }
}

fn expected_list(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [one] => one.display_name().to_string(),
        many => {
            let names: Vec<&str> = many.iter().map(|kind| kind.display_name()).collect();
            format!("one of [{}]", names.join(", "))
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Eol => "end of line".to_string(),
        kind => format!("{kind} `{}`", token.to_source()),
    }
}

fn bracket(kind: &TokenKind) -> String {
    let symbol = match kind {
        TokenKind::RoundL => "(",
        TokenKind::RoundR => ")",
        TokenKind::SquareL => "[",
        TokenKind::SquareR => "]",
        TokenKind::CurlyL => "{",
        TokenKind::CurlyR => "}",
        other => other.display_name(),
    };
    format!("`{symbol}`")
}
