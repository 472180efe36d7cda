//! Low-level scanning primitives for conveycode.
//!
//! This crate owns the [`Cursor`]: a bounds-checked, line-tracking view over
//! the source as a sequence of Unicode code points. It knows nothing about
//! tokens; the tokenizer in `conv_lexer` drives it.

mod cursor;

pub use cursor::{Cursor, EOT};
