//! Instruction emission for conveycode.
//!
//! Turns assignment [`Block`](conv_blocks::Block)s into mnemonic instruction
//! lines:
//!
//! ```text
//! var x = 5       →  set x 5
//! var z = x + y   →  op add z x y
//! ```
//!
//! Only a plain value or one binary operation can be emitted. Anything with
//! more than one operator, or with a parenthesized group, is rejected with
//! [`EmitErrorKind::ChainedExpression`].

mod assignment;
mod error;
mod instruction;

pub use assignment::{emit_assignment, emit_block, mnemonic};
pub use error::{EmitError, EmitErrorKind};
pub use instruction::InstructionLine;
