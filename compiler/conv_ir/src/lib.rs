//! Shared vocabulary for the conveycode front end.
//!
//! Every stage of the pipeline speaks in these types:
//!
//! ```text
//! source text
//!     │  conv_lexer::tokenize
//!     ▼
//! TokenStream ── Token { kind, value, span, location }
//!     │  conv_blocks::BlockLexer
//!     ▼
//! Blocks
//! ```
//!
//! Spans and columns count Unicode code points, not bytes.

mod span;
mod token;
mod token_stream;

pub use span::{LineCol, Span, SpanError};
pub use token::{Token, TokenKind};
pub use token_stream::{render_tokens, TokenStream};
