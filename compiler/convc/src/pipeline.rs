//! Source text to instruction lines.

use std::io;

use conv_blocks::{Block, BlockKind, BlockLexer};
use conv_diagnostic::Diagnostic;
use conv_emit::{emit_block, InstructionLine};
use tracing::{debug, warn};

use crate::CompilerConfig;

/// Everything one run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOutput {
    /// One line per successfully emitted assignment, in source order.
    pub instructions: Vec<InstructionLine>,
    /// `Statement` and `Instruction` blocks, in source order, for the
    /// downstream writer.
    pub blocks: Vec<Block>,
    /// Scan warnings first, then lexer and emitter errors in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    /// Check whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// The instruction lines, one per line.
    pub fn render_instructions(&self) -> String {
        let lines: Vec<String> = self.instructions.iter().map(ToString::to_string).collect();
        lines.join("\n")
    }

    fn accept(&mut self, block: Block) {
        match block.kind {
            BlockKind::Assignment => match emit_block(&block) {
                Ok(line) => self.instructions.push(line),
                Err(err) => {
                    warn!(code = %err.kind.error_code(), "emit failed: {err}");
                    self.diagnostics.push(err.to_diagnostic());
                }
            },
            BlockKind::Statement | BlockKind::Instruction => self.blocks.push(block),
            BlockKind::Error => {
                if let Some(diagnostic) = block.diagnostic {
                    self.diagnostics.push(diagnostic);
                }
            }
        }
    }
}

/// Failures of the driver itself. Problems in the source are diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to start the block lexer thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("the block lexer thread panicked")]
    LexerPanicked,
}

/// Compile one source text.
///
/// Returns `Err` only when the block lexer thread cannot be started or
/// panics; every problem in the source is reported in
/// [`CompileOutput::diagnostics`].
pub fn compile_source(
    source: &str,
    config: &CompilerConfig,
) -> Result<CompileOutput, CompileError> {
    let lexed = conv_lexer::tokenize(source);
    let mut output = CompileOutput {
        diagnostics: lexed.diagnostics(),
        ..CompileOutput::default()
    };

    let lexer = BlockLexer::with_config(lexed.tokens, config.lexer.clone());
    if config.concurrent {
        let mut receiver = lexer.spawn()?;
        for block in receiver.by_ref() {
            output.accept(block);
        }
        let rest = receiver.join().map_err(|_| CompileError::LexerPanicked)?;
        for block in rest {
            output.accept(block);
        }
    } else {
        for block in lexer {
            output.accept(block);
        }
    }

    debug!(
        instructions = output.instructions.len(),
        blocks = output.blocks.len(),
        errors = output.error_count(),
        warnings = output.warning_count(),
        "compiled source"
    );
    Ok(output)
}
