use conv_blocks::BlockLexerConfig;
use conv_diagnostic::emitter::ColorMode;

/// Settings for one [`compile_source`](crate::compile_source) run.
#[derive(Clone, Debug)]
pub struct CompilerConfig {
    pub lexer: BlockLexerConfig,
    /// Colors for rendered diagnostics.
    pub color_mode: ColorMode,
    /// Run the block lexer on a producer thread. Pull mode otherwise.
    pub concurrent: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            lexer: BlockLexerConfig::default(),
            color_mode: ColorMode::Auto,
            concurrent: true,
        }
    }
}

impl CompilerConfig {
    #[must_use]
    pub fn with_lexer(mut self, lexer: BlockLexerConfig) -> Self {
        self.lexer = lexer;
        self
    }

    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    #[must_use]
    pub fn with_concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }
}
