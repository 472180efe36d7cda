//! Block lexer for conveycode.
//!
//! Runs a finite state machine over a [`TokenStream`] and groups tokens into
//! [`Block`]s: assignments, `if`/`else` statements and `$command(...)`
//! instructions. Each block is a list of labeled [`Item`]s.
//!
//! # Architecture
//!
//! ```text
//! TokenStream ─► TokenCursor (start, pos) ─► LexState machine ─► Blocks
//!                                                 │
//!                                                 └─► pull: BlockLexer::next_block
//!                                                     push: BlockLexer::spawn (bounded handoff)
//! ```
//!
//! The cursor keeps a *selection*: tokens between `start` and `pos` that the
//! current state has read but not yet sealed into an item. Sealing an item
//! moves `start` up to `pos`.
//!
//! Structural errors are not recovered from. The first one produces a single
//! error block carrying a [`Diagnostic`](conv_diagnostic::Diagnostic) and the
//! lexer stops.

mod block;
mod config;
mod cursor;
mod error;
mod handoff;
mod highlight;
mod lexer;

pub use block::{Block, BlockKind, Item, ItemKind, Items};
pub use config::BlockLexerConfig;
pub use cursor::{Selection, TokenCursor};
pub use error::{LexError, LexErrorKind};
pub use handoff::BlockReceiver;
pub use highlight::render_highlight;
pub use lexer::{BlockLexer, LexState};

pub use conv_ir::{Token, TokenKind, TokenStream};
