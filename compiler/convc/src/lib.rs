//! conveycode front-end driver.
//!
//! Runs the whole pipeline on one source text:
//!
//! ```text
//! source ─► tokenize ─► BlockLexer ─► emit_block (assignments)
//!                            │
//!                            └─► Statement / Instruction blocks (downstream writer)
//! ```
//!
//! Scan warnings, the block lexer's error block and emitter failures all
//! come back as [`Diagnostic`]s in [`CompileOutput`].

mod config;
mod pipeline;
mod report;

use std::sync::Once;

pub use config::CompilerConfig;
pub use pipeline::{compile_source, CompileError, CompileOutput};
pub use report::{render_diagnostics, render_diagnostics_to_stderr};

pub use conv_diagnostic::emitter::ColorMode;
pub use conv_diagnostic::Diagnostic;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=conv_blocks=debug` or `RUST_LOG=conv_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
