//! Tokenizer for conveycode.
//!
//! Turns source text into a flat [`TokenStream`] by running a fixed,
//! priority-ordered table of recognizers over a code-point
//! [`Cursor`](conv_lexer_core::Cursor):
//!
//! ```text
//! whitespace > EOL > comment > string > number > operator > separator
//!            > command > brackets > text
//! ```
//!
//! Scanning never stops early. Problems are collected as [`ScanError`]s next
//! to the tokens and the caller decides how loudly to report them.

mod recognizer;
mod scan_error;
mod tokenizer;

pub use scan_error::{ScanError, ScanErrorKind};
pub use tokenizer::{tokenize, tokenize_chars, LexOutput, Tokenizer};

pub use conv_ir::{Token, TokenKind, TokenStream};
