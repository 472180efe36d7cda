//! The tokenizer driver.
//!
//! Walks the cursor to the end of input, asking the recognizer table for the
//! first entry that accepts the current position. Characters nobody accepts
//! become [`ScanErrorKind::InvalidCharacter`] and are skipped.

use conv_diagnostic::Diagnostic;
use conv_ir::{LineCol, Span, Token, TokenKind, TokenStream};
use conv_lexer_core::Cursor;
use tracing::{debug, warn};

use crate::recognizer::{Recognizer, RECOGNIZERS, TEXT};
use crate::{ScanError, ScanErrorKind};

/// Tokens plus everything that went wrong while producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Always ends with exactly one EOF token.
    pub tokens: TokenStream,
    pub errors: Vec<ScanError>,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan errors as warning diagnostics, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ScanError::to_diagnostic).collect()
    }
}

/// Tokenize `source`. Carriage returns are dropped first.
pub fn tokenize(source: &str) -> LexOutput {
    Tokenizer::new(source).run()
}

/// Tokenize an already-decoded code point sequence.
pub fn tokenize_chars(chars: impl IntoIterator<Item = char>) -> LexOutput {
    Tokenizer::from_cursor(Cursor::from_chars(chars)).run()
}

/// Single-use tokenizer over one source text.
pub struct Tokenizer {
    cursor: Cursor,
    tokens: TokenStream,
    errors: Vec<ScanError>,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Self::from_cursor(Cursor::new(source))
    }

    pub fn from_cursor(cursor: Cursor) -> Self {
        // Rough guess: one token per four code points.
        let capacity = cursor.len() / 4 + 1;
        Tokenizer {
            cursor,
            tokens: TokenStream::with_capacity(capacity),
            errors: Vec::new(),
        }
    }

    /// Scan to the end of input and append the EOF token.
    pub fn run(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.step();
        }

        let end = self.cursor.pos();
        let location = self.location();
        self.tokens.push(Token::eof(offset(end), location));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized source"
        );

        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Recognize exactly one lexeme (or skip one bad character).
    fn step(&mut self) {
        let start = self.cursor.pos();
        let location = self.location();

        for recognizer in RECOGNIZERS.iter().chain(std::iter::once(&TEXT)) {
            match recognizer {
                Recognizer::Set { kind, chars } => {
                    if chars.contains(&self.cursor.peek()) {
                        let c = self.cursor.read();
                        self.push(*kind, c.to_string(), start, location);
                        return;
                    }
                }
                Recognizer::Scan { kind, test, handle } => {
                    if test(&self.cursor) {
                        let scanned = handle(&mut self.cursor);
                        if let Some(error) = scanned.error {
                            self.report(error, start, location);
                        }
                        if let Some(kind) = kind {
                            self.push(*kind, scanned.value, start, location);
                        }
                        return;
                    }
                }
            }
        }

        let found = self.cursor.read();
        self.report(ScanErrorKind::InvalidCharacter { found }, start, location);
    }

    fn push(&mut self, kind: TokenKind, value: String, start: usize, location: LineCol) {
        let span = Span::from_range(start..self.cursor.pos());
        self.tokens.push(Token::new(kind, value, span, location));
    }

    fn report(&mut self, kind: ScanErrorKind, start: usize, location: LineCol) {
        warn!(
            line = location.line,
            column = location.column,
            code = %kind.error_code(),
            "{kind}"
        );
        let span = Span::from_range(start..self.cursor.pos());
        self.errors.push(ScanError::new(kind, span, location));
    }

    #[inline]
    fn location(&self) -> LineCol {
        LineCol::new(self.cursor.line(), self.cursor.column())
    }
}

/// Code point offsets past `u32::MAX` saturate, matching `Span::from_range`.
#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
