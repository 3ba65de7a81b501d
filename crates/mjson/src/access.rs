//! Typed retrieval from a [`Value`] tree.
//!
//! The `as_*` views on [`Value`] answer "is it this kind?" with an `Option`.
//! The methods here are for callers that expect a particular shape and want a
//! descriptive error when the document does not have it.

use thiserror::Error;

use crate::value::{Array, Kind, Object, Value};

/// A typed lookup that did not match the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },
    #[error("no key '{0}'")]
    MissingKey(String),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Types that can be borrowed out of a [`Value`] of one specific kind.
pub trait FromValue<'a>: Sized {
    /// The kind a value must have to convert.
    const KIND: Kind;

    /// Returns `None` if `value` is not of kind [`Self::KIND`].
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl FromValue<'_> for i64 {
    const KIND: Kind = Kind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

/// Only floats convert; an integer literal asked for as `f64` is a mismatch.
impl FromValue<'_> for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue<'_> for bool {
    const KIND: Kind = Kind::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for &'a str {
    const KIND: Kind = Kind::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for &'a Array {
    const KIND: Kind = Kind::Array;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

impl<'a> FromValue<'a> for &'a Object {
    const KIND: Kind = Kind::Object;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl FromValue<'_> for () {
    const KIND: Kind = Kind::Null;

    fn from_value(value: &Value) -> Option<Self> {
        value.is_null().then_some(())
    }
}

impl Value {
    /// Converts this value to `T`, failing if it has a different kind.
    ///
    /// ```
    /// use mjson::{AccessError, Kind, Value};
    ///
    /// assert_eq!(Value::Integer(7).try_as::<i64>(), Ok(7));
    /// assert_eq!(
    ///     Value::Integer(7).try_as::<f64>(),
    ///     Err(AccessError::KindMismatch { expected: Kind::Float, found: Kind::Integer })
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`AccessError::KindMismatch`] if the value is not of kind `T::KIND`.
    pub fn try_as<'a, T: FromValue<'a>>(&'a self) -> Result<T, AccessError> {
        T::from_value(self).ok_or(AccessError::KindMismatch {
            expected: T::KIND,
            found: self.kind(),
        })
    }

    /// Looks up `key` in this object and converts the child to `T`.
    ///
    /// # Errors
    ///
    /// [`AccessError::KindMismatch`] if this value is not an object or the
    /// child is not of kind `T::KIND`, [`AccessError::MissingKey`] if there is
    /// no such key.
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T, AccessError> {
        self.try_as::<&Object>()?.get_as(key)
    }

    /// Takes the element at `index` of this array and converts it to `T`.
    ///
    /// # Errors
    ///
    /// [`AccessError::KindMismatch`] if this value is not an array or the
    /// element is not of kind `T::KIND`, [`AccessError::IndexOutOfBounds`] if
    /// the array is too short.
    pub fn index_as<'a, T: FromValue<'a>>(&'a self, index: usize) -> Result<T, AccessError> {
        let arr = self.try_as::<&Array>()?;
        arr.get(index)
            .ok_or(AccessError::IndexOutOfBounds {
                index,
                len: arr.len(),
            })?
            .try_as()
    }
}

impl Object {
    /// Looks up `key` and converts the value to `T`.
    ///
    /// # Errors
    ///
    /// [`AccessError::MissingKey`] or [`AccessError::KindMismatch`].
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, key: &str) -> Result<T, AccessError> {
        self.get(key)
            .ok_or_else(|| AccessError::MissingKey(key.to_owned()))?
            .try_as()
    }
}
