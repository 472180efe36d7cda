//! Scan-level problems found while tokenizing.
//!
//! None of these stop the tokenizer. Each carries its span and starting
//! line/column so it can be rendered as a warning diagnostic later.

use conv_diagnostic::{Diagnostic, ErrorCode};
use conv_ir::{LineCol, Span};

/// A problem found while scanning, with where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {location}")]
pub struct ScanError {
    pub span: Span,
    pub location: LineCol,
    pub kind: ScanErrorKind,
}

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// A string literal ran to the end of input without its closing quote.
    #[error("unterminated string literal opened with `{quote}`")]
    UnterminatedString { quote: char },
    /// A character no recognizer accepts. It is skipped.
    #[error("unknown character `{}`", .found.escape_debug())]
    InvalidCharacter { found: char },
}

impl ScanErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ScanErrorKind::UnterminatedString { .. } => ErrorCode::E0001,
            ScanErrorKind::InvalidCharacter { .. } => ErrorCode::E0002,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            ScanErrorKind::UnterminatedString { .. } => "string starts here",
            ScanErrorKind::InvalidCharacter { .. } => "skipped",
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ScanErrorKind::UnterminatedString { quote } => {
                Some(format!("close the string with a matching `{quote}`"))
            }
            ScanErrorKind::InvalidCharacter { .. } => None,
        }
    }
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, span: Span, location: LineCol) -> Self {
        ScanError {
            span,
            location,
            kind,
        }
    }

    /// Convert into a warning diagnostic. Scan errors are never fatal.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::warning(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.location, self.kind.primary_label());
        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }
        diag
    }
}
