use core::fmt::Write;

use quickcheck::{Arbitrary, Gen};

use crate::{Array, Object, Value};

/// Characters a generated string may contain: everything except `"`, which
/// the grammar cannot express inside a string.
const STRING_CHARS: &[char] = &[
    'a', 'b', 'z', 'A', 'Q', '0', '9', ' ', '_', '-', ':', ',', '{', '}', '[', ']', '\\', '\n',
    '\t', 'é', 'ß', '中', '😀',
];

/// A float whose shortest decimal form has no exponent and survives a round
/// trip through text unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PlainFloat(pub f64);

impl Arbitrary for PlainFloat {
    fn arbitrary(g: &mut Gen) -> Self {
        let scale = *g.choose(&[1.0, 2.0, 4.0, 8.0, 1024.0]).unwrap_or(&1.0);
        Self(f64::from(i32::arbitrary(g)) / scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlainString(pub String);

impl Arbitrary for PlainString {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8;
        Self(
            (0..len)
                .map(|_| *g.choose(STRING_CHARS).unwrap_or(&'a'))
                .collect(),
        )
    }
}

/// A document the parser must accept: a container root holding any mix of
/// values.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Document(pub Value);

impl Arbitrary for Document {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_scalar(g: &mut Gen) -> Value {
            match usize::arbitrary(g) % 5 {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 => Value::Integer(i64::arbitrary(g)),
                3 => Value::Float(PlainFloat::arbitrary(g).0),
                _ => Value::String(PlainString::arbitrary(g).0),
            }
        }

        fn gen_container(g: &mut Gen, depth: usize) -> Value {
            let len = usize::arbitrary(g) % 4;
            let child = |g: &mut Gen| {
                if depth > 0 && usize::arbitrary(g) % 3 == 0 {
                    gen_container(g, depth - 1)
                } else {
                    gen_scalar(g)
                }
            };
            if bool::arbitrary(g) {
                Value::Array((0..len).map(|_| child(g)).collect::<Array>())
            } else {
                let mut obj = Object::new();
                for _ in 0..len {
                    let key = PlainString::arbitrary(g).0;
                    obj.insert(key, child(g));
                }
                Value::Object(obj)
            }
        }

        let depth = usize::arbitrary(g) % 4;
        Self(gen_container(g, depth))
    }
}

/// Writes `value` in the grammar the lexer accepts.
pub(crate) fn render(value: &Value, separator: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, value, separator);
    out
}

fn write_value(out: &mut String, value: &Value, separator: &str) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Float(n) => {
            let text = n.to_string();
            out.push_str(&text);
            if !text.contains('.') {
                out.push_str(".0");
            }
        }
        Value::String(s) => {
            let _ = write!(out, "\"{s}\"");
        }
        Value::Array(arr) => {
            out.push('[');
            for (idx, item) in arr.iter().enumerate() {
                if idx > 0 {
                    out.push_str(separator);
                }
                write_value(out, item, separator);
            }
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            for (idx, (key, item)) in obj.iter().enumerate() {
                if idx > 0 {
                    out.push_str(separator);
                }
                let _ = write!(out, "\"{key}\": ");
                write_value(out, item, separator);
            }
            out.push('}');
        }
    }
}
