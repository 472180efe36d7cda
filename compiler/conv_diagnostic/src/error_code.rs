//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Tokenizer errors
/// - E1xxx: Block lexer (statement recognition) errors
/// - E2xxx: Instruction emission errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,

    // Block Lexer Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unclosed delimiter
    E1002,
    /// Unknown command
    E1003,
    /// Unsupported statement
    E1004,

    // Emission Errors (E2xxx)
    /// Unsupported expression
    E2001,
    /// Malformed assignment
    E2002,

    // Internal Errors (E9xxx)
    /// Internal lexer invariant violated
    E9001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description, for `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unclosed delimiter",
            ErrorCode::E1003 => "unknown command",
            ErrorCode::E1004 => "unsupported statement",
            ErrorCode::E2001 => "unsupported expression",
            ErrorCode::E2002 => "malformed assignment",
            ErrorCode::E9001 => "internal lexer error",
        }
    }

    pub fn is_tokenizer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    pub fn is_block_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    pub fn is_emit_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
