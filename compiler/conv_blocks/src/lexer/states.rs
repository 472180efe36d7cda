//! One method per [`LexState`].

use conv_ir::TokenKind;

use super::{BlockLexer, LexState};
use crate::{BlockKind, ItemKind, LexError, LexErrorKind};

type StateResult = Result<Option<LexState>, LexError>;

/// Token kinds that continue an assignment value.
const VALUE_KINDS: [TokenKind; 4] = [
    TokenKind::String,
    TokenKind::Number,
    TokenKind::Text,
    TokenKind::Operator,
];

impl BlockLexer {
    /// Skip blank lines and comments, then dispatch on the first token of a
    /// statement.
    ///
    /// A word not followed by an operator, or any other token that cannot
    /// start a statement, is an
    /// [`UnexpectedStatementStart`](LexErrorKind::UnexpectedStatementStart)
    /// error (E1001). The error block ends lexing; nothing after it is read.
    pub(super) fn lex_text(&mut self) -> StateResult {
        loop {
            let token = self.cursor.read();
            match token.kind {
                TokenKind::Eof => return Ok(None),
                TokenKind::Eol | TokenKind::Comment => self.cursor.consume(),
                TokenKind::Command => return Ok(Some(LexState::Command)),
                TokenKind::Text => {
                    let word = token.value.as_str();
                    let config = &self.config;
                    if word == config.var_keyword {
                        return Ok(Some(LexState::Assignment { keyword: true }));
                    }
                    if word == config.if_keyword {
                        return Ok(Some(LexState::IfStatement));
                    }
                    if word == config.else_keyword {
                        return Ok(Some(LexState::ElseStatement));
                    }
                    if config.is_reserved(word) {
                        let keyword = word.to_string();
                        return Err(self
                            .cursor
                            .error(LexErrorKind::UnsupportedStatement { keyword }));
                    }
                    if self.cursor.peek().kind == TokenKind::Operator {
                        return Ok(Some(LexState::Assignment { keyword: false }));
                    }
                    let found = self.cursor.peek_back().clone();
                    return Err(self
                        .cursor
                        .error(LexErrorKind::UnexpectedStatementStart { found }));
                }
                _ => {
                    let found = token.clone();
                    return Err(self
                        .cursor
                        .error(LexErrorKind::UnexpectedStatementStart { found }));
                }
            }
        }
    }

    /// `[var] NAME OP VALUE...`
    ///
    /// The value runs over strings, numbers, words, operators and
    /// parenthesized groups, and stops before anything else. The line feed
    /// that ends it is left for [`lex_text`](Self::lex_text).
    pub(super) fn lex_assignment(&mut self, keyword: bool) -> StateResult {
        if keyword {
            self.emit_item(ItemKind::Keyword);
        } else {
            self.cursor.reset();
        }

        self.cursor.expect(&[TokenKind::Text])?;
        self.emit_item(ItemKind::Identifier);

        self.cursor.expect(&[TokenKind::Operator])?;
        self.emit_item(ItemKind::Operator);

        loop {
            let kind = self.cursor.peek().kind;
            if VALUE_KINDS.contains(&kind) {
                self.cursor.read();
            } else if kind == TokenKind::RoundL {
                self.cursor.read();
                self.cursor.wrap_scope("assignment value")?;
            } else {
                break;
            }
        }

        if self.cursor.selection().is_empty() {
            // Nothing value-shaped follows the operator.
            self.cursor.expect(&[
                TokenKind::String,
                TokenKind::Number,
                TokenKind::Text,
                TokenKind::RoundL,
            ])?;
        }
        self.emit_item(ItemKind::Value);
        self.emit_block(BlockKind::Assignment);

        Ok(Some(LexState::Text))
    }

    /// `if (CONDITION) { SCOPE }`
    ///
    /// Also the continuation of `else if`, in which case the keyword item is
    /// both words.
    pub(super) fn lex_if_statement(&mut self) -> StateResult {
        self.emit_item(ItemKind::Keyword);

        self.cursor.expect(&[TokenKind::RoundL])?;
        self.cursor.wrap_scope("condition")?;
        self.emit_enclosed(ItemKind::Condition);

        self.lex_scope()?;
        self.emit_block(BlockKind::Statement);

        Ok(Some(LexState::Text))
    }

    /// `else { SCOPE }` or `else if ...`
    pub(super) fn lex_else_statement(&mut self) -> StateResult {
        let if_keyword = self.config.if_keyword.clone();
        if self.cursor.accept_content(&if_keyword) {
            return Ok(Some(LexState::IfStatement));
        }

        self.emit_item(ItemKind::Keyword);
        self.lex_scope()?;
        self.emit_block(BlockKind::Statement);

        Ok(Some(LexState::Text))
    }

    /// `$name(ARGUMENTS)`
    pub(super) fn lex_command(&mut self) -> StateResult {
        let name = &self.cursor.peek_back().value;
        if !self.config.is_command(name) {
            let name = name.clone();
            return Err(self.cursor.error(LexErrorKind::UnknownCommand { name }));
        }
        self.emit_item(ItemKind::Command);

        self.cursor.expect(&[TokenKind::RoundL])?;
        self.cursor.wrap_scope("command arguments")?;
        self.emit_enclosed(ItemKind::Arguments);
        self.emit_block(BlockKind::Instruction);

        Ok(Some(LexState::Text))
    }

    /// `{ ... }` body of a statement, as a Scope item.
    fn lex_scope(&mut self) -> Result<(), LexError> {
        self.cursor.expect(&[TokenKind::CurlyL])?;
        self.cursor.wrap_scope("statement scope")?;
        self.emit_enclosed(ItemKind::Scope);
        Ok(())
    }
}
