//! Position-tracking cursor over a code point sequence.
//!
//! The cursor owns the source as a `Vec<char>` with every carriage return
//! removed, so line endings are represented by `\n` alone. All accesses are
//! bounds-checked: out-of-range peeks return [`EOT`] and out-of-range seeks
//! return `false` without moving. The tokenizer probes one past the end
//! routinely, so none of these paths may panic.
//!
//! # Line tracking
//!
//! `line` and `column` are updated one step at a time as the position moves.
//! Stepping backward over a line feed needs the start of the previous line;
//! the cursor records each line start the first time it crosses into that
//! line, so backtracking never rescans the source.

/// End-of-transmission sentinel returned for out-of-range reads.
pub const EOT: char = '\u{4}';

/// Bounds-checked cursor over a carriage-return-free code point sequence.
///
/// # Invariants
///
/// - `pos` is always in `0..=len`.
/// - `eof` is `true` exactly when `pos == len`.
/// - `line_starts[n]` is the offset of the first code point of line `n + 1`,
///   for every line the cursor has reached so far.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    /// One-based line of `pos`.
    line: u32,
    /// One-based column of `pos`.
    column: u32,
    line_starts: Vec<usize>,
    eof: bool,
}

impl Cursor {
    /// Create a cursor at the start of `source`, stripping carriage returns.
    pub fn new(source: &str) -> Self {
        Self::from_chars(source.chars())
    }

    /// Create a cursor from code points, stripping carriage returns.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let chars: Vec<char> = chars.into_iter().filter(|&c| c != '\r').collect();
        let eof = chars.is_empty();
        Cursor {
            chars,
            pos: 0,
            line: 1,
            column: 1,
            line_starts: vec![0],
            eof,
        }
    }

    /// Current position, in code points from the start.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of code points in the (carriage-return-free) source.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// One-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// One-based column of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` once the position has reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// The code points the cursor runs over.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Move the position by `offset` code points.
    ///
    /// Returns `false` and leaves the cursor untouched if the destination
    /// would fall outside `0..=len`. Moving backward off the end clears the
    /// end-of-input flag.
    pub fn seek(&mut self, offset: isize) -> bool {
        let Some(target) = self.pos.checked_add_signed(offset) else {
            return false;
        };
        if target > self.chars.len() {
            return false;
        }
        while self.pos < target {
            self.step_forward();
        }
        while self.pos > target {
            self.step_back();
        }
        true
    }

    /// The code point `offset` positions away from the current one.
    ///
    /// Returns [`EOT`] when that position is out of range.
    #[inline]
    pub fn peek_at(&self, offset: isize) -> char {
        self.pos
            .checked_add_signed(offset)
            .and_then(|index| self.chars.get(index))
            .copied()
            .unwrap_or(EOT)
    }

    /// The code point at the current position, or [`EOT`] at the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// The code point after the current one.
    #[inline]
    pub fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    /// The code point before the current one.
    #[inline]
    pub fn peek_prev(&self) -> char {
        self.peek_at(-1)
    }

    /// Check whether the current code point is one of `set`.
    #[inline]
    pub fn current_in(&self, set: &str) -> bool {
        let c = self.peek();
        c != EOT && set.contains(c)
    }

    /// Return the current code point and advance past it.
    ///
    /// At the end of input, returns [`EOT`] without moving.
    pub fn read(&mut self) -> char {
        if self.eof {
            return EOT;
        }
        let c = self.chars[self.pos];
        self.step_forward();
        c
    }

    /// Read up to `n` code points.
    ///
    /// Reads past the end contribute nothing, so the result may be shorter
    /// than `n`.
    pub fn read_n(&mut self, n: usize) -> String {
        let mut out = String::with_capacity(n);
        for _ in 0..n {
            if self.eof {
                break;
            }
            out.push(self.read());
        }
        out
    }

    /// Read code points until `stop` holds for the current one.
    ///
    /// The code point that satisfied `stop` is not consumed. Stops at the end
    /// of input as well.
    pub fn read_until(&mut self, mut stop: impl FnMut(char) -> bool) -> String {
        let mut out = String::new();
        while !self.eof && !stop(self.peek()) {
            out.push(self.read());
        }
        out
    }

    /// Skip code points until `stop` holds for the current one.
    ///
    /// Like [`read_until`](Self::read_until) without collecting anything.
    pub fn skip_until(&mut self, mut stop: impl FnMut(char) -> bool) {
        while !self.eof && !stop(self.peek()) {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        let c = self.chars[self.pos];
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            if self.line_starts.len() < self.line as usize {
                self.line_starts.push(self.pos);
            }
        } else {
            self.column += 1;
        }
        self.eof = self.pos == self.chars.len();
    }

    fn step_back(&mut self) {
        self.pos -= 1;
        if self.chars[self.pos] == '\n' {
            self.line -= 1;
            let line_start = self.line_starts[self.line as usize - 1];
            self.column = column_of(self.pos - line_start);
        } else {
            self.column -= 1;
        }
        self.eof = false;
    }
}

/// Convert a zero-based distance from the line start to a one-based column.
fn column_of(distance: usize) -> u32 {
    u32::try_from(distance + 1).unwrap_or(u32::MAX)
}
