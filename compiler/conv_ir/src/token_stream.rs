//! Ordered, appendable token sequence.

use std::fmt;
use std::ops::Range;

use crate::{Token, TokenKind};

/// Ordered sequence of tokens with stable iteration order.
///
/// A stream produced by the tokenizer always ends with an EOF token.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        TokenStream { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenStream {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Plain value stream: the cooked value of every token, in order.
    pub fn values(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Reconstruct source-like text from the whole stream.
    ///
    /// See [`render_tokens`] for the spacing rules.
    pub fn render(&self) -> String {
        render_tokens(&self.tokens)
    }

    /// Reconstruct source-like text from a sub-range of the stream.
    ///
    /// Out-of-range bounds are clamped to the stream.
    pub fn render_range(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        render_tokens(&self.tokens[start..end])
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

/// Join tokens back into text.
///
/// Tokens on one line are separated by a single space (the whitespace the
/// tokenizer dropped), EOL tokens become line feeds and EOF renders as
/// nothing.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut at_line_start = true;
    for token in tokens {
        match token.kind {
            TokenKind::Eol => {
                out.push('\n');
                at_line_start = true;
            }
            TokenKind::Eof => {}
            _ => {
                if !at_line_start {
                    out.push(' ');
                }
                out.push_str(&token.to_source());
                at_line_start = false;
            }
        }
    }
    out
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenStream({} tokens)", self.tokens.len())
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("\n  ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream {
            tokens: iter.into_iter().collect(),
        }
    }
}
