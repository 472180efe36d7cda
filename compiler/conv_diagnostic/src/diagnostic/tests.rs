use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Span::new(0, 5), LineCol::new(1, 1), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E0001).with_message("unterminated");
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_primary_span_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_secondary_label(Span::new(0, 1), LineCol::new(1, 1), "opened here")
        .with_label(Span::new(9, 9), LineCol::new(1, 10), "expected `)`");

    assert_eq!(diag.primary_span(), Some(Span::new(9, 9)));
    assert_eq!(diag.primary_location(), Some(LineCol::new(1, 10)));
}

#[test]
fn test_primary_span_none_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E9001);
    assert_eq!(diag.primary_span(), None);
    assert_eq!(diag.primary_location(), None);
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unknown command `beep`")
        .with_label(Span::new(0, 5), LineCol::new(2, 1), "not a known command")
        .with_note("known commands: print")
        .with_suggestion("check the spelling");

    let text = diag.to_string();
    assert!(text.starts_with("error [E1003]: unknown command `beep`"));
    assert!(text.contains("--> 2:1: not a known command"));
    assert!(text.contains("= note: known commands: print"));
    assert!(text.contains("= help: check the spelling"));
}
