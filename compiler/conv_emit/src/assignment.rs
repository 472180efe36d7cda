//! Assignment blocks to `set`/`op` instruction lines.

use conv_blocks::{Block, BlockKind, ItemKind};
use conv_ir::{render_tokens, Token, TokenKind};
use tracing::trace;

use crate::{EmitError, EmitErrorKind, InstructionLine};

/// Opcode mnemonic for an operator symbol.
///
/// The four arithmetic symbols have names. Every other symbol is returned
/// unchanged.
pub fn mnemonic(symbol: &str) -> &str {
    match symbol {
        "+" => "add",
        "-" => "sub",
        "*" => "mul",
        "/" => "div",
        other => other,
    }
}

/// Emit the instruction for `identifier = value`.
///
/// `[lhs, OP, rhs]` becomes `op`; a value with no operators or brackets
/// becomes `set` with each token in source form. Anything else is a
/// [`ChainedExpression`](EmitErrorKind::ChainedExpression).
pub fn emit_assignment(identifier: &str, value: &[Token]) -> Result<InstructionLine, EmitError> {
    if value.is_empty() {
        return Err(EmitError::new(EmitErrorKind::EmptyValue {
            identifier: identifier.to_string(),
        }));
    }

    let line = match value {
        [lhs, op, rhs]
            if op.kind == TokenKind::Operator && lhs.kind.is_value() && rhs.kind.is_value() =>
        {
            InstructionLine::op(
                mnemonic(&op.value),
                identifier,
                &lhs.to_source(),
                &rhs.to_source(),
            )
        }
        _ if value.iter().all(|token| token.kind.is_value()) => {
            InstructionLine::set(identifier, value.iter().map(|t| t.to_source().into_owned()))
        }
        _ => {
            return Err(EmitError::at(
                EmitErrorKind::ChainedExpression {
                    expression: render_tokens(value),
                },
                value,
            ));
        }
    };

    trace!(%line, "emit instruction");
    Ok(line)
}

/// Emit the instruction for an assignment block.
pub fn emit_block(block: &Block) -> Result<InstructionLine, EmitError> {
    let all_tokens: Vec<Token> = block
        .items
        .iter()
        .flat_map(|item| item.tokens.iter().cloned())
        .collect();

    if block.kind != BlockKind::Assignment {
        return Err(EmitError::at(
            EmitErrorKind::NotAnAssignment { kind: block.kind },
            &all_tokens,
        ));
    }

    let identifier = block
        .item(ItemKind::Identifier)
        .and_then(|item| item.tokens.first())
        .ok_or_else(|| EmitError::at(EmitErrorKind::MissingIdentifier, &all_tokens))?;

    if let Some(operator) = block.item(ItemKind::Operator) {
        let found = operator.text();
        if found != "=" {
            return Err(EmitError::at(
                EmitErrorKind::AssignmentOperator { found },
                &operator.tokens,
            ));
        }
    }

    let value = block
        .item(ItemKind::Value)
        .map_or(&[][..], |item| item.tokens.as_slice());
    emit_assignment(&identifier.value, value)
        .map_err(|err| err.or_at(std::slice::from_ref(identifier)))
}
