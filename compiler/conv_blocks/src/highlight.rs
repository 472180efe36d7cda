//! Rendering of a selection against the whole token stream.
//!
//! Tokens are laid out the way [`render_tokens`](conv_ir::render_tokens)
//! lays them out. Every rendered line that holds part of the selection is
//! followed by a marker line with `^` under the selected tokens. An empty
//! selection gets a single `^` at the insertion point.
//!
//! ```text
//! var x = (
//!         ^
//! ```

use conv_ir::{Token, TokenKind};

use crate::Selection;

const MARK: &str = "\x1b[1;31m"; // Bold red
const RESET: &str = "\x1b[0m";

/// One rendered line plus its marker line.
#[derive(Default)]
struct Line {
    /// Plain text, used for column arithmetic.
    width: usize,
    text: String,
    markers: String,
    marked: bool,
}

impl Line {
    fn mark_at(&mut self, column: usize, count: usize) {
        let padding = column.saturating_sub(self.markers.chars().count());
        self.markers.extend(std::iter::repeat(' ').take(padding));
        self.markers.extend(std::iter::repeat('^').take(count));
        self.marked = true;
    }

    fn finish(self, out: &mut Vec<String>, colors: bool) {
        out.push(self.text);
        if self.marked && colors {
            out.push(format!("{MARK}{}{RESET}", self.markers));
        } else if self.marked {
            out.push(self.markers);
        }
    }
}

/// Render `tokens` with `selection` marked.
///
/// With `colors`, selected tokens and markers are also wrapped in ANSI
/// escapes.
pub fn render_highlight(tokens: &[Token], selection: Selection, colors: bool) -> String {
    let mut lines = Vec::new();
    let mut line = Line::default();
    let caret = selection.is_empty().then_some(selection.start);

    for (index, token) in tokens.iter().enumerate() {
        if caret == Some(index) {
            let column = if line.width == 0 { 0 } else { line.width + 1 };
            line.mark_at(column, 1);
        }

        if matches!(token.kind, TokenKind::Eol | TokenKind::Eof) {
            // Invisible tokens are marked just past the end of the line.
            if selection.contains(index) {
                let column = if line.width == 0 { 0 } else { line.width + 1 };
                line.mark_at(column, 1);
            }
            if token.kind == TokenKind::Eol {
                std::mem::take(&mut line).finish(&mut lines, colors);
            }
            continue;
        }

        let source = token.to_source();
        let selected = selection.contains(index);
        if line.width > 0 {
            let joined = selected && index > 0 && selection.contains(index - 1);
            if joined {
                line.mark_at(line.width, 1);
            }
            line.text.push(' ');
            line.width += 1;
        }

        let width = source.chars().count();
        if selected {
            line.mark_at(line.width, width.max(1));
            if colors {
                line.text.push_str(MARK);
                line.text.push_str(&source);
                line.text.push_str(RESET);
            } else {
                line.text.push_str(&source);
            }
        } else {
            line.text.push_str(&source);
        }
        line.width += width;
    }

    if caret.is_some_and(|index| index >= tokens.len()) {
        let column = if line.width == 0 { 0 } else { line.width + 1 };
        line.mark_at(column, 1);
    }
    if !line.text.is_empty() || line.marked {
        line.finish(&mut lines, colors);
    }

    lines.join("\n")
}
