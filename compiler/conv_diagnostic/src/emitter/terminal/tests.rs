use super::*;
use crate::ErrorCode;
use conv_ir::{LineCol, Span};

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("unmatched bracket `(`")
        .with_label(Span::new(3, 4), LineCol::new(1, 9), "expected a closing `)`")
        .with_secondary_label(Span::new(0, 1), LineCol::new(1, 1), "statement starts here")
        .with_note("var x = (\n        ^")
        .with_suggestion("close the group with `)`")
}

fn render(diag: &Diagnostic, mode: ColorMode) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

// === Plain output ===

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(&sample_diagnostic(), ColorMode::Never);
    assert!(text.starts_with("error[E1002]: unmatched bracket `(`\n"));
    assert!(text.contains("  --> 1:9: expected a closing `)`\n"));
    assert!(text.contains("      1:1: statement starts here\n"));
    assert!(text.contains("help: close the group with `)`"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_multiline_note_is_indented() {
    let text = render(&sample_diagnostic(), ColorMode::Never);
    assert!(text.contains("  = note: var x = (\n          "));
    let caret_line = text
        .lines()
        .find(|line| line.trim() == "^")
        .expect("caret line rendered");
    assert!(caret_line.starts_with("          "));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(&sample_diagnostic(), ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1002"));
}

#[test]
fn test_warning_header() {
    let diag = Diagnostic::warning(ErrorCode::E0001).with_message("unterminated string");
    let text = render(&diag, ColorMode::Never);
    assert!(text.starts_with("warning[E0001]: unterminated string"));
}

#[test]
fn test_emit_all() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E2001).with_message("error 2"),
    ];

    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

// === Summary ===

fn summary(errors: usize, warnings: usize) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_emit_summary_errors() {
    let text = summary(2, 1);
    assert!(text.contains("2 previous errors"));
    assert!(text.contains("1 warning emitted"));
}

#[test]
fn test_emit_summary_single_error() {
    let text = summary(1, 0);
    assert!(text.contains("previous error"));
    assert!(!text.contains("errors"));
}

#[test]
fn test_emit_summary_warnings_only() {
    assert!(summary(0, 3).contains("3 warnings"));
}

#[test]
fn test_emit_summary_nothing() {
    assert_eq!(summary(0, 0), "");
}

// === ColorMode ===

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
