use super::*;
use conv_lexer::tokenize;
use pretty_assertions::assert_eq;

fn cursor(source: &str) -> TokenCursor {
    TokenCursor::new(tokenize(source).tokens)
}

fn selected_values(cursor: &TokenCursor) -> Vec<&str> {
    cursor.selected().iter().map(Token::text).collect()
}

// === Selection ===

#[test]
fn selection_basics() {
    let selection = Selection::new(2, 5);
    assert_eq!(selection.len(), 3);
    assert!(!selection.is_empty());
    assert!(selection.contains(2));
    assert!(selection.contains(4));
    assert!(!selection.contains(5));
    assert_eq!(selection.range(), 2..5);
    assert!(Selection::new(3, 3).is_empty());
}

// === Reading ===

#[test]
fn read_grows_selection() {
    let mut cursor = cursor("a b c");
    cursor.read();
    cursor.read();
    assert_eq!(cursor.selection(), Selection::new(0, 2));
    assert_eq!(selected_values(&cursor), vec!["a", "b"]);
}

#[test]
fn consume_and_reset() {
    let mut cursor = cursor("a b c");
    cursor.read();
    cursor.consume();
    assert_eq!(cursor.selection(), Selection::new(1, 1));
    cursor.read();
    cursor.read();
    cursor.reset();
    assert_eq!(cursor.selection(), Selection::new(1, 1));
    assert_eq!(cursor.peek().text(), "b");
}

#[test]
fn reads_past_end_return_eof_without_moving() {
    let mut cursor = cursor("a");
    assert_eq!(cursor.read().kind, TokenKind::Text);
    assert_eq!(cursor.read().kind, TokenKind::Eof);
    assert!(cursor.is_eof());
    let pos = cursor.selection().pos;
    assert_eq!(cursor.read().kind, TokenKind::Eof);
    assert_eq!(cursor.peek().kind, TokenKind::Eof);
    assert_eq!(cursor.selection().pos, pos);
}

#[test]
fn empty_stream_peeks_eof() {
    let cursor = TokenCursor::new(TokenStream::new());
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek().kind, TokenKind::Eof);
    assert_eq!(cursor.peek_back().kind, TokenKind::Eof);
}

#[test]
fn peek_back_is_last_read() {
    let mut cursor = cursor("x = 1");
    assert_eq!(cursor.peek_back().kind, TokenKind::Eof);
    cursor.read();
    cursor.read();
    assert_eq!(cursor.peek_back().text(), "=");
}

#[test]
fn backup_steps_back_inside_selection() {
    let mut cursor = cursor("a b");
    cursor.read();
    cursor.read();
    cursor.backup().unwrap();
    assert_eq!(cursor.selection(), Selection::new(0, 1));
}

#[test]
fn backup_with_empty_selection_is_internal_error() {
    let mut cursor = cursor("a b");
    cursor.read();
    cursor.consume();
    let error = cursor.backup().unwrap_err();
    assert_eq!(error.kind, LexErrorKind::BackupPastStart);
    assert_eq!(error.selection, Selection::new(1, 1));
    assert_eq!(cursor.selection(), Selection::new(1, 1));
}

#[test]
fn restore_snapshot() {
    let mut cursor = cursor("a b c");
    let snapshot = cursor.selection();
    cursor.read();
    cursor.read();
    cursor.consume();
    cursor.restore(snapshot);
    assert_eq!(cursor.selection(), snapshot);
    assert_eq!(cursor.peek().text(), "a");
}

// === Matching ===

#[test]
fn expect_accepts_listed_kind() {
    let mut cursor = cursor("x = 1");
    let token = cursor.expect(&[TokenKind::Text]).unwrap();
    assert_eq!(token.text(), "x");
}

#[test]
fn expect_mismatch_keeps_offender_selected() {
    let mut cursor = cursor("= 1");
    let error = cursor
        .expect(&[TokenKind::Text, TokenKind::Number])
        .unwrap_err();
    assert_eq!(error.selection, Selection::new(0, 1));
    assert_eq!(
        error.to_string(),
        "expected one of [Text, Number] but found Operator `=`"
    );
}

#[test]
fn expect_at_end_reports_end_of_input() {
    let mut cursor = cursor("");
    let error = cursor.expect(&[TokenKind::RoundL]).unwrap_err();
    assert_eq!(error.to_string(), "expected RoundL but found end of input");
}

#[test]
fn expect_sequence_stops_at_first_mismatch() {
    let mut cursor = cursor("x = )");
    let error = cursor
        .expect_sequence(&[
            &[TokenKind::Text],
            &[TokenKind::Operator],
            &[TokenKind::Number],
        ])
        .unwrap_err();
    assert_eq!(error.selection, Selection::new(0, 3));
    assert!(matches!(
        error.kind,
        LexErrorKind::UnexpectedToken { ref found, .. } if found.kind == TokenKind::RoundR
    ));
}

#[test]
fn accept_until_reports_how_it_stopped() {
    let mut cursor = cursor("a b , c");
    assert!(cursor.accept_until(|t| t.kind == TokenKind::Separator));
    assert_eq!(selected_values(&cursor), vec!["a", "b", ","]);
    assert!(!cursor.accept_until(|t| t.kind == TokenKind::Separator));
    assert!(cursor.is_eof());
}

#[test]
fn accept_content_only_on_exact_text() {
    let mut cursor = cursor("else if");
    assert!(!cursor.accept_content("if"));
    assert!(cursor.accept_content("else"));
    assert!(cursor.accept_content("if"));
    assert!(!cursor.accept_content(""));
    assert_eq!(selected_values(&cursor), vec!["else", "if"]);
}

// === Scopes ===

#[test]
fn wrap_scope_stops_at_matching_closer() {
    let mut cursor = cursor("( a ( b ) c ) d");
    cursor.read();
    cursor.wrap_scope("test").unwrap();
    assert_eq!(cursor.peek_back().kind, TokenKind::RoundR);
    assert_eq!(cursor.peek().text(), "d");
    assert_eq!(cursor.selected().len(), 7);
}

#[test]
fn wrap_scope_ignores_other_bracket_kinds() {
    let mut cursor = cursor("{ ( } ) }");
    cursor.read();
    cursor.wrap_scope("test").unwrap();
    assert_eq!(cursor.selection(), Selection::new(0, 3));
    assert_eq!(cursor.peek().kind, TokenKind::RoundR);
}

#[test]
fn wrap_scope_unmatched_rewinds_to_opener() {
    let mut cursor = cursor("x ( a ( b )");
    cursor.read();
    cursor.consume();
    cursor.read();
    let error = cursor.wrap_scope("condition").unwrap_err();
    assert_eq!(
        error.kind,
        LexErrorKind::UnmatchedBracket {
            open: TokenKind::RoundL,
            context: "condition"
        }
    );
    assert_eq!(cursor.selection(), Selection::new(1, 2));
    assert_eq!(error.span, Span::new(2, 3));
    assert_eq!(error.to_string(), "unmatched `(` in condition");
}

#[test]
fn wrap_scope_without_opener_is_internal_error() {
    let mut cursor = cursor("a b");
    cursor.read();
    let error = cursor.wrap_scope("test").unwrap_err();
    assert!(matches!(error.kind, LexErrorKind::NoOpenBracket { .. }));
}

// === Error location ===

#[test]
fn error_on_empty_selection_points_at_next_token() {
    let mut cursor = cursor("a\n  b");
    cursor.read();
    cursor.read();
    cursor.consume();
    let error = cursor.error(LexErrorKind::BackupPastStart);
    assert_eq!(error.span, Span::point(4));
    assert_eq!(error.location, LineCol::new(2, 3));
}

#[test]
fn error_span_covers_selection() {
    let mut cursor = cursor("ab cd ef");
    cursor.read();
    cursor.read();
    let error = cursor.error(LexErrorKind::BackupPastStart);
    assert_eq!(error.span, Span::new(0, 5));
    assert_eq!(error.location, LineCol::new(1, 1));
}

mod properties {
    use super::cursor;
    use conv_ir::TokenKind;
    use proptest::prelude::*;

    fn bracket_source() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just("("), Just(")"), Just("["), Just("]"), Just("a")],
            0..24,
        )
        .prop_map(|parts| parts.join(" "))
    }

    proptest! {
        /// After a successful wrap, the selected tokens after the opener are
        /// balanced in the opener's kind and the closer ends the selection.
        #[test]
        fn wrapped_scope_is_balanced(body in bracket_source()) {
            let source = format!("( {body}");
            let mut cursor = cursor(&source);
            cursor.read();
            if cursor.wrap_scope("test").is_ok() {
                let selected = cursor.selected();
                prop_assert_eq!(selected.last().map(|t| t.kind), Some(TokenKind::RoundR));
                let mut depth = 0i64;
                for token in &selected[1..selected.len() - 1] {
                    match token.kind {
                        TokenKind::RoundL => depth += 1,
                        TokenKind::RoundR => depth -= 1,
                        _ => {}
                    }
                    prop_assert!(depth >= 0);
                }
                prop_assert_eq!(depth, 0);
            } else {
                prop_assert_eq!(cursor.selection().pos, 1);
            }
        }
    }
}
