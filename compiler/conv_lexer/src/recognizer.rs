//! The recognizer table.
//!
//! Each entry either matches a single character from a fixed set, or pairs a
//! `test` (looks, never moves) with a `handle` (consumes the lexeme and
//! returns its cooked value). The tokenizer tries entries in table order and
//! the first match wins.

use conv_ir::TokenKind;
use conv_lexer_core::Cursor;

use crate::ScanErrorKind;

/// Quote characters that open (and close) a string literal.
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Result of a `handle` function.
pub(crate) struct Scanned {
    pub value: String,
    /// Problem found while scanning; the value is still emitted.
    pub error: Option<ScanErrorKind>,
}

impl Scanned {
    fn ok(value: String) -> Self {
        Scanned { value, error: None }
    }
}

pub(crate) enum Recognizer {
    /// Single character from `chars`; the character is the value.
    Set {
        kind: TokenKind,
        chars: &'static [char],
    },
    /// `kind: None` consumes without producing a token.
    Scan {
        kind: Option<TokenKind>,
        test: fn(&Cursor) -> bool,
        handle: fn(&mut Cursor) -> Scanned,
    },
}

pub(crate) static RECOGNIZERS: [Recognizer; 14] = [
    Recognizer::Scan {
        kind: None,
        test: is_blank,
        handle: skip_blank,
    },
    Recognizer::Scan {
        kind: Some(TokenKind::Eol),
        test: is_eol,
        handle: scan_eol,
    },
    Recognizer::Scan {
        kind: Some(TokenKind::Comment),
        test: is_comment,
        handle: scan_comment,
    },
    Recognizer::Scan {
        kind: Some(TokenKind::String),
        test: is_string,
        handle: scan_string,
    },
    Recognizer::Scan {
        kind: Some(TokenKind::Number),
        test: is_number,
        handle: scan_number,
    },
    Recognizer::Set {
        kind: TokenKind::Operator,
        chars: &['+', '-', '*', '/', '%', '=', '>', '<', '!', '&', '|'],
    },
    Recognizer::Set {
        kind: TokenKind::Separator,
        chars: &[','],
    },
    Recognizer::Scan {
        kind: Some(TokenKind::Command),
        test: is_command,
        handle: scan_command,
    },
    Recognizer::Set {
        kind: TokenKind::RoundL,
        chars: &['('],
    },
    Recognizer::Set {
        kind: TokenKind::RoundR,
        chars: &[')'],
    },
    Recognizer::Set {
        kind: TokenKind::SquareL,
        chars: &['['],
    },
    Recognizer::Set {
        kind: TokenKind::SquareR,
        chars: &[']'],
    },
    Recognizer::Set {
        kind: TokenKind::CurlyL,
        chars: &['{'],
    },
    Recognizer::Set {
        kind: TokenKind::CurlyR,
        chars: &['}'],
    },
];

/// Fallback for keywords and identifiers, tried after the table.
pub(crate) static TEXT: Recognizer = Recognizer::Scan {
    kind: Some(TokenKind::Text),
    test: is_text,
    handle: scan_text,
};

/// Letters, digits and underscore.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// === Whitespace and structure ===

fn is_blank(cursor: &Cursor) -> bool {
    let c = cursor.peek();
    c != '\n' && c.is_whitespace()
}

fn skip_blank(cursor: &mut Cursor) -> Scanned {
    cursor.skip_until(|c| c == '\n' || !c.is_whitespace());
    Scanned::ok(String::new())
}

fn is_eol(cursor: &Cursor) -> bool {
    cursor.peek() == '\n'
}

fn scan_eol(cursor: &mut Cursor) -> Scanned {
    cursor.read();
    Scanned::ok(String::new())
}

fn is_comment(cursor: &Cursor) -> bool {
    cursor.peek() == '/' && cursor.peek_next() == '/'
}

fn scan_comment(cursor: &mut Cursor) -> Scanned {
    cursor.seek(2);
    Scanned::ok(cursor.read_until(|c| c == '\n'))
}

// === Literals ===

/// A quote right after a stray backslash does not open a string.
fn is_string(cursor: &Cursor) -> bool {
    QUOTES.contains(&cursor.peek()) && cursor.peek_prev() != '\\'
}

/// Reads through the closing quote.
///
/// `\<quote>` becomes the bare quote and `\\` becomes one backslash, so a
/// quote after an escaped backslash still closes the string. Any other
/// backslash is kept verbatim.
fn scan_string(cursor: &mut Cursor) -> Scanned {
    let quote = cursor.read();
    let mut value = String::new();

    loop {
        if cursor.is_eof() {
            return Scanned {
                value,
                error: Some(ScanErrorKind::UnterminatedString { quote }),
            };
        }

        let c = cursor.read();
        if c == quote {
            return Scanned::ok(value);
        }

        if c == '\\' {
            match cursor.peek() {
                next if next == quote => {
                    cursor.read();
                    value.push(quote);
                    continue;
                }
                '\\' => {
                    cursor.read();
                    value.push('\\');
                    continue;
                }
                _ => {}
            }
        }

        value.push(c);
    }
}

/// A digit, or a sign immediately followed by one.
fn is_number(cursor: &Cursor) -> bool {
    cursor.peek().is_ascii_digit()
        || (cursor.current_in("+-") && cursor.peek_next().is_ascii_digit())
}

fn scan_number(cursor: &mut Cursor) -> Scanned {
    let mut value = String::new();
    if cursor.current_in("+-") {
        value.push(cursor.read());
    }

    if cursor.peek() == '0' && matches!(cursor.peek_next(), 'x' | 'X') {
        value.push_str(&cursor.read_n(2));
        value.push_str(&cursor.read_until(|c| !c.is_ascii_hexdigit()));
        return Scanned::ok(value);
    }

    let mut decimal_point = false;
    let mut exponent = false;
    while !cursor.is_eof() {
        let c = cursor.peek();
        let accept = match c {
            '0'..='9' => true,
            '.' if !decimal_point && !exponent => {
                decimal_point = true;
                true
            }
            'e' | 'E' if !exponent => {
                exponent = true;
                true
            }
            '+' | '-' => matches!(cursor.peek_prev(), 'e' | 'E'),
            _ => false,
        };
        if !accept {
            break;
        }
        value.push(cursor.read());
    }

    Scanned::ok(value)
}

// === Words ===

fn is_command(cursor: &Cursor) -> bool {
    cursor.peek() == '$'
}

/// The value is the name without its `$`.
fn scan_command(cursor: &mut Cursor) -> Scanned {
    cursor.read();
    Scanned::ok(cursor.read_until(|c| !is_word_char(c)))
}

fn is_text(cursor: &Cursor) -> bool {
    is_word_char(cursor.peek())
}

fn scan_text(cursor: &mut Cursor) -> Scanned {
    Scanned::ok(cursor.read_until(|c| !is_word_char(c)))
}
