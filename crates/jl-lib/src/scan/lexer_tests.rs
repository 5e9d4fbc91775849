use super::lexer::Lexer;
use super::token::TokenKind;

fn dump_tokens(input: &str) -> String {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut out = String::new();
    loop {
        let kind = lexer.next_token().expect("input lexes cleanly");
        if kind == TokenKind::Eof {
            out.push_str("Eof\n");
            return out;
        }
        let text = String::from_utf8_lossy(lexer.text()).into_owned();
        out.push_str(&format!("{kind:?} {text:?}\n"));
    }
}

fn lex_error(input: &str) -> String {
    let mut lexer = Lexer::new(input.as_bytes());
    loop {
        match lexer.next_token() {
            Ok(TokenKind::Eof) => panic!("expected an error in {input:?}"),
            Ok(_) => continue,
            Err(e) => return e.to_string(),
        }
    }
}

#[test]
fn punctuation_and_keywords() {
    insta::assert_snapshot!(dump_tokens("{ } [ ] : , true false null"), @r#"
    BeginObject "{"
    EndObject "}"
    BeginArray "["
    EndArray "]"
    PairSep ":"
    MemberSep ","
    Bool "true"
    Bool "false"
    Null "null"
    Eof
    "#);
}

#[test]
fn number_forms() {
    insta::assert_snapshot!(dump_tokens("0 -0 7 -42 3.25 -0.5 6e4 1e+9 2E-3 10.25e12"), @r#"
    Number "0"
    Number "-0"
    Number "7"
    Number "-42"
    Number "3.25"
    Number "-0.5"
    Number "6e4"
    Number "1e+9"
    Number "2E-3"
    Number "10.25e12"
    Eof
    "#);
}

#[test]
fn number_ends_at_non_number_byte() {
    insta::assert_snapshot!(dump_tokens("123,45]"), @r#"
    Number "123"
    MemberSep ","
    Number "45"
    EndArray "]"
    Eof
    "#);
}

#[test]
fn leading_zero_stands_alone() {
    insta::assert_snapshot!(dump_tokens("01"), @r#"
    Number "0"
    Number "1"
    Eof
    "#);
}

#[test]
fn string_lexemes_keep_escapes() {
    let input = "\"plain\" \"\" \"with \\\"quote\\\"\" \"tab\\tand\\\\slash\" \"\\u00e9\" \"é\"";
    insta::assert_snapshot!(dump_tokens(input), @r#"
    Str "plain"
    Str ""
    Str "with \\\"quote\\\""
    Str "tab\\tand\\\\slash"
    Str "\\u00e9"
    Str "é"
    Eof
    "#);
}

#[test]
fn whitespace_only_is_eof() {
    insta::assert_snapshot!(dump_tokens(" \t\r\n "), @"Eof");
}

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new(&b"42 7"[..]);
    assert_eq!(lexer.peek_token().unwrap(), TokenKind::Number);
    assert_eq!(lexer.text(), b"42");
    assert_eq!(lexer.peek_token().unwrap(), TokenKind::Number);
    assert_eq!(lexer.next_token().unwrap(), TokenKind::Number);
    assert_eq!(lexer.text(), b"42");
    assert_eq!(lexer.next_token().unwrap(), TokenKind::Number);
    assert_eq!(lexer.text(), b"7");
    assert_eq!(lexer.next_token().unwrap(), TokenKind::Eof);
}

#[test]
fn keyword_failures() {
    assert_eq!(lex_error("tru"), "error matching literal: true");
    assert_eq!(lex_error("falze"), "error matching literal: false");
    assert_eq!(lex_error("nil"), "error matching literal: null");
}

#[test]
fn number_failures() {
    assert_eq!(lex_error("-"), "no digit following minus sign");
    assert_eq!(lex_error("-x"), "no digit following minus sign");
    assert_eq!(lex_error("1."), "no digits after fraction");
    assert_eq!(lex_error("1.e5"), "no digits after fraction");
    assert_eq!(lex_error("1e"), "no exponent digits");
    assert_eq!(lex_error("1e+"), "no exponent digits");
    assert_eq!(lex_error("1ex"), "no exponent digits");
}

#[test]
fn string_failures() {
    assert_eq!(lex_error(r#""open"#), "non-terminated string");
    assert_eq!(lex_error("\"a\u{1}b\""), "control character in string");
    assert_eq!(lex_error(r#""\q""#), "invalid escape character: 'q'");
    assert_eq!(lex_error(r#""\u12g4""#), "not a hex character: 'g'");
}

#[test]
fn unexpected_bytes() {
    assert_eq!(lex_error("@"), "unexpected character: '@'");
    assert_eq!(lex_error("[=]"), "unexpected character: '='");
}
