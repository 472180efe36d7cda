//! Token cursor with a selection.
//!
//! The cursor works like a text caret over tokens. `start` and `pos` are
//! both indices into the stream; while they are equal nothing is selected.
//! Reading moves `pos` forward and grows the selection. `consume` drops the
//! selection by moving `start` up to `pos`; `reset` gives it back by moving
//! `pos` down to `start`.
//!
//! Reads past the end never panic. `peek`, `peek_back` and `read` hand back
//! a synthesized EOF token positioned at the end of the stream instead.

use std::ops::Range;

use conv_ir::{LineCol, Span, Token, TokenKind, TokenStream};
use tracing::trace;

use crate::{LexError, LexErrorKind};

/// A copyable `(start, pos)` snapshot of the cursor selection.
///
/// Restoring a snapshot is how the lexer backtracks.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Selection {
    pub start: usize,
    pub pos: usize,
}

impl Selection {
    #[inline]
    pub const fn new(start: usize, pos: usize) -> Self {
        Selection { start, pos }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.pos.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos <= self.start
    }

    /// Check whether token `index` is selected.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.pos
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.pos
    }
}

/// Cursor over an owned token stream.
pub struct TokenCursor {
    tokens: TokenStream,
    selection: Selection,
    /// Returned for every out-of-range access.
    eof: Token,
}

impl TokenCursor {
    pub fn new(tokens: TokenStream) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.span.end, last.location),
            None => Token::eof(0, LineCol::START),
        };
        TokenCursor {
            tokens,
            selection: Selection::default(),
            eof,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Position
    // ─────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Restore a snapshot taken with [`selection`](Self::selection).
    #[inline]
    pub fn restore(&mut self, selection: Selection) {
        self.selection = selection;
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    /// The selected tokens.
    pub fn selected(&self) -> &[Token] {
        self.slice(self.selection.range())
    }

    /// Tokens in `range`, clamped to the stream.
    pub fn slice(&self, range: Range<usize>) -> &[Token] {
        let len = self.tokens.len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        &self.tokens.as_slice()[start..end]
    }

    /// Check whether every token has been read.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.selection.pos >= self.tokens.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reading
    // ─────────────────────────────────────────────────────────────────────

    /// The next token, without reading it.
    #[inline]
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.selection.pos).unwrap_or(&self.eof)
    }

    /// The most recently read token.
    #[inline]
    pub fn peek_back(&self) -> &Token {
        self.selection
            .pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.eof)
    }

    /// Read the next token into the selection.
    ///
    /// At the end of the stream, returns the EOF token without moving.
    pub fn read(&mut self) -> &Token {
        if self.is_eof() {
            return &self.eof;
        }
        let current = self.selection.pos;
        self.selection.pos += 1;
        let token = &self.tokens[current];
        trace!(
            pos = current,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "read"
        );
        token
    }

    /// Un-read the last token of the selection.
    pub fn backup(&mut self) -> Result<(), LexError> {
        if self.selection.is_empty() {
            return Err(self.error(LexErrorKind::BackupPastStart));
        }
        self.selection.pos -= 1;
        Ok(())
    }

    /// Drop the selection: `start = pos`.
    #[inline]
    pub fn consume(&mut self) {
        self.selection.start = self.selection.pos;
    }

    /// Un-read the whole selection: `pos = start`.
    #[inline]
    pub fn reset(&mut self) {
        self.selection.pos = self.selection.start;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Matching
    // ─────────────────────────────────────────────────────────────────────

    /// Read one token and check its kind.
    ///
    /// On mismatch the offending token stays selected so the error points at
    /// it.
    pub fn expect(&mut self, valid: &[TokenKind]) -> Result<&Token, LexError> {
        let kind = self.read().kind;
        if valid.contains(&kind) {
            return Ok(self.peek_back());
        }
        let found = self.peek_back().clone();
        Err(self.error(LexErrorKind::UnexpectedToken {
            expected: valid.to_vec(),
            found,
        }))
    }

    /// [`expect`](Self::expect) each entry of `sequence` in order.
    pub fn expect_sequence(&mut self, sequence: &[&[TokenKind]]) -> Result<(), LexError> {
        for valid in sequence {
            self.expect(valid)?;
        }
        Ok(())
    }

    /// Read until `stop` holds for the token just read.
    ///
    /// Returns `true` if `stop` matched and `false` if the stream ran out.
    /// The matching token is part of the selection.
    pub fn accept_until(&mut self, mut stop: impl FnMut(&Token) -> bool) -> bool {
        while !self.is_eof() {
            if stop(self.read()) {
                return true;
            }
        }
        false
    }

    /// Read the next token only if its text is exactly `text`.
    pub fn accept_content(&mut self, text: &str) -> bool {
        let next = self.peek();
        if next.kind != TokenKind::Eof && next.value == text {
            self.read();
            return true;
        }
        false
    }

    /// Read through the bracket matching the one just read.
    ///
    /// Same-kind openers nest; other bracket kinds pass through untouched.
    /// On success the closer is the last selected token. If the stream runs
    /// out first, the cursor goes back to just after the opener and an
    /// [`UnmatchedBracket`](LexErrorKind::UnmatchedBracket) error is returned.
    pub fn wrap_scope(&mut self, context: &'static str) -> Result<(), LexError> {
        let open = self.peek_back().kind;
        let Some(close) = open.closing_bracket() else {
            let found = self.peek_back().clone();
            return Err(self.error(LexErrorKind::NoOpenBracket { found }));
        };

        let entry = self.selection.pos;
        let mut depth = 0usize;
        let closed = self.accept_until(|token| {
            if token.kind == close {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            } else if token.kind == open {
                depth += 1;
            }
            false
        });

        if closed {
            return Ok(());
        }
        self.selection.pos = entry;
        Err(self.error(LexErrorKind::UnmatchedBracket { open, context }))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Errors
    // ─────────────────────────────────────────────────────────────────────

    /// Build an error located at the selection.
    ///
    /// An empty selection points at the next token instead.
    #[cold]
    pub fn error(&self, kind: LexErrorKind) -> LexError {
        let (span, location) = match self.selected() {
            [] => {
                let next = self.peek();
                (Span::point(next.span.start), next.location)
            }
            [first, .., last] => (first.span.merge(last.span), first.location),
            [only] => (only.span, only.location),
        };
        LexError {
            kind,
            selection: self.selection,
            span,
            location,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
