//! Cross-checks documents inside the shared grammar against `serde_json`.

use mjson::{Object, Value, load_from_text};
use rstest::rstest;

fn from_serde(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(int) => Value::Integer(int),
            None => Value::Float(n.as_f64().expect("finite number")),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, from_serde(value)))
                .collect::<Object>(),
        ),
    }
}

#[rstest]
#[case("[]")]
#[case("{}")]
#[case("[1, -2, 3.25, -0.5, true, false, null]")]
#[case(r#"{"a": {"b": {"c": [1, [2, [3]]]}}}"#)]
#[case(r#"[{"name": "object0"}, {"name": "object1"}]"#)]
#[case(r#"{"unicode": "héllo ✓", "empty": ""}"#)]
#[case(r#"{"dup": 1, "other": 2, "dup": 3}"#)]
#[case("[9223372036854775807, -9223372036854775808]")]
#[case("{\n\t\"layout\" : [ 1 ,\r\n 2 ]\n}")]
fn agrees_with_serde_json(#[case] source: &str) {
    let expected = from_serde(serde_json::from_str(source).expect("serde_json accepts"));
    assert_eq!(load_from_text(source), Ok(expected));
}

#[rstest]
#[case::missing_commas("[1 2]")]
#[case::doubled_commas("[1,,2]")]
#[case::trailing_comma("[1,]")]
#[case::leading_zero("[01]")]
fn accepted_where_serde_json_is_stricter(#[case] source: &str) {
    assert!(serde_json::from_str::<serde_json::Value>(source).is_err());
    assert!(load_from_text(source).is_ok());
}

#[rstest]
#[case::exponent("[1e5]")]
#[case::escape(r#"["a\"b"]"#)]
#[case::scalar_root("1")]
#[case::string_root(r#""text""#)]
fn rejected_where_serde_json_is_lenient(#[case] source: &str) {
    assert!(serde_json::from_str::<serde_json::Value>(source).is_ok());
    assert!(load_from_text(source).is_err());
}
