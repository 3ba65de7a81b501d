use rstest::rstest;

use crate::{CharClass, SyntaxError, TokenKind, load_from_text};

#[rstest]
#[case::empty("", "source contains no JSON document at 1:1")]
#[case::blank(" \n ", "source contains no JSON document at 1:1")]
#[case::bad_char("[1, #]", "invalid character '#' at 1:5")]
#[case::plus_sign("[+1]", "invalid character '+' at 1:2")]
#[case::leading_period("[.5]", "invalid character '.' at 1:2")]
#[case::capital_literal("[True]", "invalid literal 'True', expected true, false or null at 1:2")]
#[case::exponent("[1e10]", "invalid number '1e10' at 1:2")]
#[case::two_periods("[\n1.2.3]", "invalid number '1.2.3' at 2:1")]
#[case::open_string("[\"abc]", "unterminated string literal at 1:2")]
#[case::string_then_value("[\"a\" 1]", "unexpected NUMBER after STRING at 1:6")]
#[case::stray_colon("[1 : 2]", "unexpected COLON after NUMBER at 1:4")]
#[case::scalar_root("\"a\"", "document root must be an array or object, found STRING at 1:1")]
#[case::open_array("[1,2", "input ended before every array and object was closed at 1:4")]
#[case::number_after_root("[] 1", "unexpected NUMBER after ARRAY_END at 1:4")]
#[case::lone_number("-7", "document root must be an array or object, found NUMBER at 1:1")]
#[case::open_object("{\"a\": [1]\n", "input ended before every array and object was closed at 1:9")]
#[case::value_after_object_start("{{}}", "unexpected OBJECT_START after OBJECT_START at 1:2")]
fn error_messages(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(load_from_text(source).unwrap_err().to_string(), expected);
}

#[test]
fn unbalanced_array_is_rejected() {
    let err = load_from_text("[1,2").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnterminatedContainer);
}

#[test]
fn floats_beyond_f64_are_rejected() {
    let literal = format!("1{}.5", "9".repeat(400));
    let err = load_from_text(&format!("{{\"big\": {literal}}}")).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidNumber(literal));

    let literal = format!("-{}.0", "9".repeat(400));
    let err = load_from_text(&format!("[0, {literal}]")).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidNumber(literal));
    assert_eq!((err.line, err.column), (1, 5));
}

#[test]
fn bare_value_inside_object_is_rejected() {
    let err = load_from_text(r#"{"a": 1, 2}"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxError::UnexpectedTokenSequence {
            found: TokenKind::Number,
            after: TokenKind::Number,
        }
    );
}

#[test]
fn string_cannot_be_followed_by_an_opener() {
    let err = load_from_text(r#"["a" {}]"#).unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxError::MisplacedCharacter {
            found: CharClass::BraceOpen,
            after: TokenKind::String,
        }
    );
}

#[test]
fn first_error_wins() {
    // both a bad literal and an unclosed array; the literal comes first
    let err = load_from_text("[nope, [1").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidLiteral("nope".into()));
}

#[test]
fn errors_after_a_complete_root() {
    let err = load_from_text("{} {}").unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxError::UnexpectedTokenSequence {
            found: TokenKind::ObjectStart,
            after: TokenKind::ObjectEnd,
        }
    );
    assert_eq!((err.line, err.column), (1, 4));
}
