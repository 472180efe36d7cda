//! The block lexer state machine.
//!
//! Each [`LexState`] names one recognizer. Running a state either emits
//! items and blocks and names the next state, or finishes the machine. An
//! `Err` from any state turns into [`LexState::Error`], which emits one error
//! block and finishes.

mod states;

use std::collections::VecDeque;
use std::mem;

use conv_ir::TokenStream;
use tracing::{debug, warn};

use crate::block::Items;
use crate::{
    render_highlight, Block, BlockKind, BlockLexerConfig, Item, ItemKind, LexError, TokenCursor,
};

/// States of the block lexer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexState {
    /// Between statements. Initial state.
    Text,
    /// Inside an assignment. `keyword` is set when it started with `var`.
    Assignment { keyword: bool },
    IfStatement,
    ElseStatement,
    /// After a `$name` token.
    Command,
    /// Emit the error block, then finish.
    Error(Box<LexError>),
}

/// Groups a token stream into [`Block`]s.
///
/// Pull blocks with [`next_block`](Self::next_block) (or iterate), or move
/// the lexer onto a producer thread with [`spawn`](Self::spawn).
pub struct BlockLexer {
    cursor: TokenCursor,
    config: BlockLexerConfig,
    /// Items of the block being built.
    items: Items,
    /// `None` once the machine has finished.
    state: Option<LexState>,
    /// Emitted blocks not yet handed out.
    pending: VecDeque<Block>,
}

impl BlockLexer {
    pub fn new(tokens: TokenStream) -> Self {
        Self::with_config(tokens, BlockLexerConfig::default())
    }

    pub fn with_config(tokens: TokenStream, config: BlockLexerConfig) -> Self {
        BlockLexer {
            cursor: TokenCursor::new(tokens),
            config,
            items: Items::new(),
            state: Some(LexState::Text),
            pending: VecDeque::with_capacity(2),
        }
    }

    #[inline]
    pub fn config(&self) -> &BlockLexerConfig {
        &self.config
    }

    /// The state that runs next, or `None` once finished.
    #[inline]
    pub fn state(&self) -> Option<&LexState> {
        self.state.as_ref()
    }

    /// Check whether every block has been produced and handed out.
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.pending.is_empty()
    }

    /// Run the machine until a block is available.
    ///
    /// Returns `None` once the machine has finished and every block has been
    /// returned. After an error block, always `None`.
    pub fn next_block(&mut self) -> Option<Block> {
        loop {
            if let Some(block) = self.pending.pop_front() {
                return Some(block);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }

    /// Run one state.
    fn step(&mut self, state: LexState) -> Option<LexState> {
        let result = match state {
            LexState::Text => self.lex_text(),
            LexState::Assignment { keyword } => self.lex_assignment(keyword),
            LexState::IfStatement => self.lex_if_statement(),
            LexState::ElseStatement => self.lex_else_statement(),
            LexState::Command => self.lex_command(),
            LexState::Error(error) => {
                self.lex_error(&error);
                return None;
            }
        };

        match result {
            Ok(next) => next,
            Err(error) => {
                warn!(
                    code = %error.kind.error_code(),
                    line = error.location.line,
                    column = error.location.column,
                    "block lexer error: {error}"
                );
                Some(LexState::Error(Box::new(error)))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Emission
    // ─────────────────────────────────────────────────────────────────────

    /// Seal the selection into an item and consume it.
    fn emit_item(&mut self, kind: ItemKind) {
        let tokens = self.cursor.selected().to_vec();
        self.items.push(Item::new(kind, tokens));
        self.cursor.consume();
    }

    /// Seal the selection minus its first and last token (the brackets) into
    /// an item and consume all of it.
    fn emit_enclosed(&mut self, kind: ItemKind) {
        let selection = self.cursor.selection();
        let inner = (selection.start + 1)..selection.pos.saturating_sub(1);
        let tokens = self.cursor.slice(inner).to_vec();
        self.items.push(Item::new(kind, tokens));
        self.cursor.consume();
    }

    /// Package the accumulated items into a block and queue it.
    fn emit_block(&mut self, kind: BlockKind) {
        let block = Block::new(kind, mem::take(&mut self.items));
        debug!(kind = %kind, items = block.items.len(), "emit block");
        self.pending.push_back(block);
        self.cursor.consume();
    }

    /// Queue the terminal error block.
    #[cold]
    fn lex_error(&mut self, error: &LexError) {
        let highlight = render_highlight(
            self.cursor.tokens(),
            error.selection,
            self.config.colored_highlight,
        );
        let commands = self.config.sorted_commands();
        let diagnostic = error.to_diagnostic(&highlight, &commands);

        let selected = self.cursor.slice(error.selection.range()).to_vec();
        self.items.clear();
        let block = Block::error(Item::new(ItemKind::Error, selected), diagnostic);
        debug!(kind = %block.kind, "emit block");
        self.pending.push_back(block);
    }
}

impl Iterator for BlockLexer {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.next_block()
    }
}
