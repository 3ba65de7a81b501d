//! The dynamic value tree produced by the parser.
//!
//! A parsed document is a [`Value`] whose root is always an array or an
//! object. Containers own their children outright, so the tree is plain data:
//! it can be cloned, compared, and sent across threads.

use core::{
    fmt,
    ops::{Index, IndexMut},
};

use indexmap::IndexMap;

/// An ordered list of values.
pub type Array = Vec<Value>;

/// A JSON value.
///
/// Numbers are split by their literal form: a literal containing `.` is a
/// [`Float`](Value::Float), anything else an [`Integer`](Value::Integer).
///
/// # Examples
///
/// ```
/// use mjson::{Kind, Value};
///
/// let doc = mjson::load_from_text(r#"{"count": 3, "ratio": 0.5}"#).unwrap();
/// assert_eq!(doc.kind(), Kind::Object);
/// assert_eq!(doc["count"], Value::Integer(3));
/// assert_eq!(doc["ratio"].as_f64(), Some(0.5));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Array(Array),
    Object(Object),
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Integer,
    Float,
    Boolean,
    String,
    Array,
    Object,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind tag of the value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` for both integers and floats.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(..) | Self::Object(..))
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the payload of a [`Float`](Value::Float). Integers are not
    /// converted; use [`as_number`](Value::as_number) for that.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns any number as an `f64`, promoting integers.
    ///
    /// ```
    /// use mjson::Value;
    ///
    /// assert_eq!(Value::Integer(-30).as_number(), Some(-30.0));
    /// assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Number of children of a container; `0` for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// Returns `true` for empty containers and for all scalars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up `key` in an object. Always `None` for other kinds.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Returns the element at `index` of an array. Always `None` for other
    /// kinds.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The child most recently added to this container.
    ///
    /// For arrays this is the last element. For objects it is the value of the
    /// most recent insertion, which for a repeated key is not the last entry
    /// in iteration order.
    #[must_use]
    pub fn last_inserted(&self) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.last(),
            Value::Object(obj) => obj.last_inserted(),
            _ => None,
        }
    }

    pub fn last_inserted_mut(&mut self) -> Option<&mut Value> {
        match self {
            Value::Array(arr) => arr.last_mut(),
            Value::Object(obj) => obj.last_inserted_mut(),
            _ => None,
        }
    }
}

/// Unchecked lookup for callers that know the shape of the document.
///
/// # Panics
///
/// Panics if the value is not an object or has no such key. Use
/// [`Value::get`] or [`Value::get_as`] to handle either case.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(obj) => &obj[key],
            other => panic!("cannot index {} with key '{key}'", other.kind()),
        }
    }
}

/// # Panics
///
/// Panics if the value is not an array or `index` is out of bounds.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(arr) => &arr[index],
            other => panic!("cannot index {} with position {index}", other.kind()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

/// A map from unique string keys to values.
///
/// Entries iterate in insertion order. Re-inserting an existing key replaces
/// its value in place. Equality ignores order.
#[derive(Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
    /// Index of the entry written by the most recent insert.
    last: Option<usize>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key` and returns the value it replaced, if any.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let (index, previous) = self.entries.insert_full(key.into(), value);
        self.last = Some(index);
        previous
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last_inserted(&self) -> Option<&Value> {
        self.last
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, value)| value)
    }

    pub fn last_inserted_mut(&mut self) -> Option<&mut Value> {
        self.last
            .and_then(|index| self.entries.get_index_mut(index))
            .map(|(_, value)| value)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// # Panics
///
/// Panics if the key is missing.
impl Index<&str> for Object {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("no key '{key}' in object"),
        }
    }
}

/// # Panics
///
/// Panics if the key is missing.
impl IndexMut<&str> for Object {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.entries.get_mut(key) {
            Some(value) => value,
            None => panic!("no key '{key}' in object"),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{Object, Value};

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Integer(n) => serializer.serialize_i64(*n),
                Value::Float(n) => serializer.serialize_f64(*n),
                Value::Boolean(b) => serializer.serialize_bool(*b),
                Value::String(s) => serializer.serialize_str(s),
                Value::Array(arr) => arr.serialize(serializer),
                Value::Object(obj) => obj.serialize(serializer),
            }
        }
    }

    impl Serialize for Object {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}
