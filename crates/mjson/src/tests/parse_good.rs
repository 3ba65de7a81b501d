use rstest::rstest;

use crate::{Kind, Object, Value, load_from_text};

fn arr(items: impl IntoIterator<Item = Value>) -> Value {
    Value::Array(items.into_iter().collect())
}

fn obj<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
    Value::Object(entries.into_iter().collect::<Object>())
}

#[rstest]
#[case::empty_array("[]", arr([]))]
#[case::empty_object("{}", obj([]))]
#[case::padded("  \n\t[ ]\r\n", arr([]))]
#[case::scalars(
    "[1, -2, 0.5, -0.25, true, false, null, \"s\", \"\"]",
    arr([
        1.into(),
        (-2).into(),
        0.5.into(),
        (-0.25).into(),
        true.into(),
        false.into(),
        Value::Null,
        "s".into(),
        "".into(),
    ])
)]
#[case::nested("[[[]], {}]", arr([arr([arr([])]), obj([])]))]
#[case::object_values(
    r#"{"a": 1, "b": [true], "c": {"d": null}}"#,
    obj([
        ("a", 1.into()),
        ("b", arr([true.into()])),
        ("c", obj([("d", Value::Null)])),
    ])
)]
#[case::missing_commas("[1 2 3]", arr([1.into(), 2.into(), 3.into()]))]
#[case::doubled_commas("[1,,2,]", arr([1.into(), 2.into()]))]
#[case::leading_comma("{,\"a\": 1}", obj([("a", 1.into())]))]
#[case::tight("{\"a\":[1,2],\"b\":\"c\"}", obj([("a", arr([1.into(), 2.into()])), ("b", "c".into())]))]
#[case::string_keeps_backslashes(r#"["a\nb"]"#, arr([r"a\nb".into()]))]
#[case::string_with_structural_chars(r#"["{[:,]}"]"#, arr(["{[:,]}".into()]))]
#[case::unicode_in_strings("[\"héllo wörld ✓\"]", arr(["héllo wörld ✓".into()]))]
#[case::leading_zeros("[007, -00.50]", arr([7.into(), (-0.5).into()]))]
fn accepted_documents(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(load_from_text(source), Ok(expected));
}

#[test]
fn root_is_always_a_container() {
    for source in ["[1]", "{\"k\": 1}", "[[]]"] {
        let root = load_from_text(source).unwrap();
        assert!(matches!(root.kind(), Kind::Array | Kind::Object));
    }
}

#[test]
fn keys_keep_document_order() {
    let root = load_from_text(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let keys: Vec<_> = root.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn mixed_array_keeps_kinds_in_order() {
    let root = load_from_text(r#"[true, 1, 3.4, false, -3, -6.5, "a string"]"#).unwrap();
    let kinds: Vec<_> = root.as_array().unwrap().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::Boolean,
            Kind::Integer,
            Kind::Float,
            Kind::Boolean,
            Kind::Integer,
            Kind::Float,
            Kind::String,
        ]
    );
}

#[test]
fn nested_tree_snapshot() {
    let root = load_from_text(
        r#"{
            "object_array": [{"name": "object0"}, {"name": "object1"}],
            "transform": {"m_position": [0, 0], "m_scale": [1.5, 1]}
        }"#,
    )
    .unwrap();

    insta::assert_debug_snapshot!(root, @r#"
    Object(
        {
            "object_array": Array(
                [
                    Object(
                        {
                            "name": String(
                                "object0",
                            ),
                        },
                    ),
                    Object(
                        {
                            "name": String(
                                "object1",
                            ),
                        },
                    ),
                ],
            ),
            "transform": Object(
                {
                    "m_position": Array(
                        [
                            Integer(
                                0,
                            ),
                            Integer(
                                0,
                            ),
                        ],
                    ),
                    "m_scale": Array(
                        [
                            Float(
                                1.5,
                            ),
                            Integer(
                                1,
                            ),
                        ],
                    ),
                },
            ),
        },
    )
    "#);
}
