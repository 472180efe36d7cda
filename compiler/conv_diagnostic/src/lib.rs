//! Diagnostic system for error reporting across the front end.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - labels pointing at where it went wrong (span and line:column)
//! - notes and suggestions giving context and a way out
//!
//! Stages never print errors themselves; they hand [`Diagnostic`] values to
//! the caller, which decides how to render them (see [`emitter`]).

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
