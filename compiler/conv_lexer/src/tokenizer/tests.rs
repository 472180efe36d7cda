use super::*;
use conv_ir::TokenKind::{
    Command, Comment, CurlyL, CurlyR, Eof, Eol, Number, Operator, RoundL, RoundR, Separator,
    SquareL, SquareR, String as Str, Text,
};
use pretty_assertions::assert_eq;

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .tokens
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

fn eof() -> (TokenKind, String) {
    tok(Eof, "")
}

// === Basic shapes ===

#[test]
fn empty_source_is_only_eof() {
    let output = tokenize("");
    assert_eq!(output.tokens.kinds(), vec![Eof]);
    assert!(!output.has_errors());
}

#[test]
fn whitespace_only_source() {
    assert_eq!(lex(" \t  "), vec![eof()]);
}

#[test]
fn simple_assignment() {
    assert_eq!(
        lex("var x = 5"),
        vec![
            tok(Text, "var"),
            tok(Text, "x"),
            tok(Operator, "="),
            tok(Number, "5"),
            eof(),
        ]
    );
}

#[test]
fn line_feeds_become_empty_eol_tokens() {
    assert_eq!(
        lex("a\n\nb"),
        vec![tok(Text, "a"), tok(Eol, ""), tok(Eol, ""), tok(Text, "b"), eof()]
    );
}

#[test]
fn carriage_returns_are_invisible() {
    assert_eq!(lex("a\r\nb"), lex("a\nb"));
}

#[test]
fn brackets_and_separators() {
    assert_eq!(
        lex("$print(a, [1]){}"),
        vec![
            tok(Command, "print"),
            tok(RoundL, "("),
            tok(Text, "a"),
            tok(Separator, ","),
            tok(SquareL, "["),
            tok(Number, "1"),
            tok(SquareR, "]"),
            tok(RoundR, ")"),
            tok(CurlyL, "{"),
            tok(CurlyR, "}"),
            eof(),
        ]
    );
}

#[test]
fn every_operator_character() {
    let tokens = lex("+ - * / % = > < ! & |");
    assert_eq!(tokens.len(), 12);
    assert!(tokens[..11].iter().all(|(kind, _)| *kind == Operator));
}

#[test]
fn unicode_identifiers_are_text() {
    assert_eq!(lex("größe_1"), vec![tok(Text, "größe_1"), eof()]);
}

// === Comments ===

#[test]
fn comment_runs_to_line_feed() {
    assert_eq!(
        lex("x // note here\ny"),
        vec![
            tok(Text, "x"),
            tok(Comment, " note here"),
            tok(Eol, ""),
            tok(Text, "y"),
            eof(),
        ]
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(lex("//done"), vec![tok(Comment, "done"), eof()]);
}

#[test]
fn single_slash_is_operator() {
    assert_eq!(
        lex("a / b"),
        vec![tok(Text, "a"), tok(Operator, "/"), tok(Text, "b"), eof()]
    );
}

// === Strings ===

#[test]
fn escaped_quote_stays_inside_string() {
    assert_eq!(
        lex(r#"var s = "a\"b""#),
        vec![
            tok(Text, "var"),
            tok(Text, "s"),
            tok(Operator, "="),
            tok(Str, "a\"b"),
            eof(),
        ]
    );
}

#[test]
fn all_three_quote_styles() {
    assert_eq!(
        lex(r#""a" 'b' `c`"#),
        vec![tok(Str, "a"), tok(Str, "b"), tok(Str, "c"), eof()]
    );
}

#[test]
fn other_quote_kinds_do_not_close() {
    assert_eq!(lex(r#"'say "hi"'"#), vec![tok(Str, "say \"hi\""), eof()]);
}

#[test]
fn double_backslash_does_not_escape_quote() {
    assert_eq!(lex(r#""a\\" x"#), vec![tok(Str, "a\\"), tok(Text, "x"), eof()]);
}

#[test]
fn backslash_before_foreign_quote_survives_requoting() {
    let output = tokenize(r#"'a\"'"#);
    assert!(output.errors.is_empty());
    assert_eq!(output.tokens[0].value, r#"a\""#);

    let requoted = tokenize(&output.tokens[0].to_source());
    assert!(requoted.errors.is_empty());
    assert_eq!(requoted.tokens.kinds(), vec![Str, Eof]);
    assert_eq!(requoted.tokens[0].value, r#"a\""#);
}

#[test]
fn unknown_escape_keeps_backslash() {
    assert_eq!(lex(r#""a\nb""#), vec![tok(Str, r"a\nb"), eof()]);
}

#[test]
fn unterminated_string_runs_to_end_and_warns() {
    let output = tokenize("var s = \"abc\nnext");
    assert_eq!(
        output.tokens.kinds(),
        vec![Text, Text, Operator, Str, Eof]
    );
    assert_eq!(output.tokens[3].value, "abc\nnext");
    assert_eq!(output.errors.len(), 1);

    let error = &output.errors[0];
    assert_eq!(error.kind, ScanErrorKind::UnterminatedString { quote: '"' });
    assert_eq!(error.location, LineCol::new(1, 9));
    assert_eq!(error.span, Span::new(8, 17));
}

#[test]
fn string_spans_include_quotes() {
    let output = tokenize(r#"x "ab""#);
    assert_eq!(output.tokens[1].span, Span::new(2, 6));
}

// === Numbers ===

#[test]
fn decimal_and_exponent_numbers() {
    assert_eq!(
        lex("1.5 2e10 3E-4 6e+2"),
        vec![
            tok(Number, "1.5"),
            tok(Number, "2e10"),
            tok(Number, "3E-4"),
            tok(Number, "6e+2"),
            eof(),
        ]
    );
}

#[test]
fn second_decimal_point_ends_number() {
    let output = tokenize("1.2.3");
    assert_eq!(output.tokens.values(), vec!["1.2", "3", ""]);
    assert_eq!(
        output.errors[0].kind,
        ScanErrorKind::InvalidCharacter { found: '.' }
    );
}

#[test]
fn hex_numbers() {
    assert_eq!(
        lex("0x1F 0Xab"),
        vec![tok(Number, "0x1F"), tok(Number, "0Xab"), eof()]
    );
}

#[test]
fn hex_stops_at_non_hex_digit() {
    assert_eq!(lex("0xfg"), vec![tok(Number, "0xf"), tok(Text, "g"), eof()]);
}

#[test]
fn sign_directly_before_digit_is_part_of_number() {
    assert_eq!(
        lex("x = -5"),
        vec![tok(Text, "x"), tok(Operator, "="), tok(Number, "-5"), eof()]
    );
}

#[test]
fn spaced_sign_is_operator() {
    assert_eq!(
        lex("x - 5"),
        vec![tok(Text, "x"), tok(Operator, "-"), tok(Number, "5"), eof()]
    );
}

#[test]
fn plus_after_digit_is_not_absorbed() {
    assert_eq!(
        lex("1+2"),
        vec![tok(Number, "1"), tok(Number, "+2"), eof()]
    );
}

// === Commands ===

#[test]
fn command_value_drops_sigil() {
    assert_eq!(
        lex("$print_line2 x"),
        vec![tok(Command, "print_line2"), tok(Text, "x"), eof()]
    );
}

#[test]
fn bare_sigil_is_empty_command() {
    assert_eq!(lex("$ x"), vec![tok(Command, ""), tok(Text, "x"), eof()]);
}

// === Scan errors ===

#[test]
fn unknown_character_is_reported_and_skipped() {
    let output = tokenize("a # b");
    assert_eq!(output.tokens.values(), vec!["a", "b", ""]);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        ScanErrorKind::InvalidCharacter { found: '#' }
    );
    assert_eq!(output.errors[0].location, LineCol::new(1, 3));
    assert_eq!(output.errors[0].span, Span::new(2, 3));
}

#[test]
fn diagnostics_are_warnings_in_source_order() {
    let output = tokenize("# x @\n'open");
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics.iter().all(|d| !d.is_error()));
    let lines: Vec<u32> = output.errors.iter().map(|e| e.location.line).collect();
    assert_eq!(lines, vec![1, 1, 2]);
}

// === Positions ===

#[test]
fn locations_track_lines_and_columns() {
    let output = tokenize("var x\n  y = 1");
    let locations: Vec<LineCol> = output.tokens.iter().map(|t| t.location).collect();
    assert_eq!(
        locations,
        vec![
            LineCol::new(1, 1),
            LineCol::new(1, 5),
            LineCol::new(1, 6),
            LineCol::new(2, 3),
            LineCol::new(2, 5),
            LineCol::new(2, 7),
            LineCol::new(2, 8),
        ]
    );
}

#[test]
fn eof_sits_at_end_of_input() {
    let output = tokenize("ab\n");
    let last = output.tokens.last().unwrap();
    assert_eq!(last.kind, Eof);
    assert_eq!(last.span, Span::point(3));
    assert_eq!(last.location, LineCol::new(2, 1));
}

#[test]
fn tokenize_chars_matches_tokenize() {
    let source = "if (a > 1) { $print(a) }";
    assert_eq!(tokenize_chars(source.chars()), tokenize(source));
}

mod properties {
    use super::super::tokenize;
    use conv_ir::{render_tokens, TokenKind};
    use proptest::prelude::*;

    fn lexeme() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z_][a-z0-9_]{0,6}",
            "[0-9]{1,4}",
            "[0-9]{1,2}\\.[0-9]{1,2}",
            "0x[0-9A-F]{1,4}",
            "[+*/%=<>!&|-]",
            Just(",".to_string()),
            "[(){}\\[\\]]",
            "\\$[a-z]{1,6}",
            "\"[a-z \"']{0,6}\"".prop_map(|s| {
                let inner = &s[1..s.len() - 1];
                format!("\"{}\"", inner.replace('"', "\\\""))
            }),
            "'[a-z \"\\\\]{0,5}[a-z]'",
            "`[a-z '\"\\\\]{0,5}[a-z]`",
            Just("\n".to_string()),
        ]
    }

    fn significant(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    proptest! {
        #[test]
        fn rendering_round_trips(lexemes in proptest::collection::vec(lexeme(), 0..24)) {
            let source = lexemes.join(" ");
            let first = tokenize(&source);
            prop_assert!(first.errors.is_empty());

            let rendered = render_tokens(first.tokens.as_slice());
            prop_assert_eq!(significant(&rendered), significant(&source));
        }

        #[test]
        fn escaped_quotes_survive(content in "[a-z \"]{0,12}") {
            let source = format!("\"{}\"", content.replace('"', "\\\""));
            let output = tokenize(&source);
            prop_assert_eq!(output.tokens.kinds(), vec![TokenKind::String, TokenKind::Eof]);
            prop_assert_eq!(&output.tokens[0].value, &content);
        }

        #[test]
        fn tokenizing_is_deterministic(source in "\\PC{0,64}") {
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        }

        #[test]
        fn spans_are_ordered_and_disjoint(source in "[a-z0-9 \n\"'$#(){}+=.-]{0,64}") {
            let output = tokenize(&source);
            let tokens = output.tokens.as_slice();
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        }
    }
}
