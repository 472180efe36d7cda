//! Diagnostic output.

use std::io::{self, Write};

use conv_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use conv_diagnostic::Diagnostic;

use crate::CompilerConfig;

/// Render `diagnostics` and a summary line into `writer`.
///
/// Colors follow `config.color_mode`; `is_tty` only matters for
/// [`ColorMode::Auto`](crate::ColorMode::Auto). Returns the writer so
/// callers can inspect buffered output.
pub fn render_diagnostics<W: Write>(
    diagnostics: &[Diagnostic],
    writer: W,
    config: &CompilerConfig,
    is_tty: bool,
) -> W {
    let mut emitter = TerminalEmitter::with_color_mode(writer, config.color_mode, is_tty);
    emitter.emit_all(diagnostics);

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
    emitter.into_inner()
}

/// Render `diagnostics` to stderr, detecting whether it is a terminal.
pub fn render_diagnostics_to_stderr(diagnostics: &[Diagnostic], config: &CompilerConfig) {
    let is_tty = io::IsTerminal::is_terminal(&io::stderr());
    render_diagnostics(diagnostics, io::stderr(), config, is_tty);
}
