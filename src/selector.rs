//! Key selectors: how a grouping key is derived from a record.

use std::fmt;

use serde_json::Value;

use crate::core::{GroupKey, Record};
use crate::error::GroupError;

/// Boxed key function produced by normalising a [`KeySelector`].
pub type KeyFn<'f, R> = Box<dyn Fn(&R) -> GroupKey + 'f>;

/// Derives a [`GroupKey`] from a record, either by field name or by function.
///
/// # Examples
///
/// ```
/// use rhymebucket::{GroupKey, KeySelector};
/// use serde_json::{json, Value};
///
/// let by_field: KeySelector<Value> = "team".into();
/// let by_fn = KeySelector::key_fn(|r: &Value| r["team"].clone());
///
/// let record = json!({ "name": "Steve", "team": "blue" });
/// assert_eq!(by_field.key_of(&record), GroupKey::from("blue"));
/// assert_eq!(by_fn.key_of(&record), GroupKey::from("blue"));
/// ```
pub enum KeySelector<'f, R: ?Sized> {
    /// Look the key up as a field of the record.
    Field(String),
    /// Compute the key with a function.
    KeyFn(KeyFn<'f, R>),
}

impl<'f, R: ?Sized + 'f> KeySelector<'f, R> {
    pub fn field(name: impl Into<String>) -> Self {
        KeySelector::Field(name.into())
    }

    /// Wraps a function returning anything convertible into a [`GroupKey`].
    pub fn key_fn<F, K>(f: F) -> Self
    where
        F: Fn(&R) -> K + 'f,
        K: Into<GroupKey> + 'f,
    {
        KeySelector::KeyFn(Box::new(move |record: &R| f(record).into()))
    }

    /// Builds a selector from a dynamic value. Only strings name a field; any
    /// other value is rejected before a single record is looked at.
    pub fn from_json(value: &Value) -> Result<Self, GroupError> {
        match value {
            Value::String(name) => Ok(KeySelector::Field(name.clone())),
            other => Err(GroupError::InvalidSelector {
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

impl<'f, R: Record + ?Sized + 'f> KeySelector<'f, R> {
    /// Normalises the selector into a single key function.
    pub fn into_key_fn(self) -> KeyFn<'f, R> {
        match self {
            KeySelector::Field(name) => Box::new(move |record: &R| record.field(&name)),
            KeySelector::KeyFn(f) => f,
        }
    }

    /// Derives the key of one record.
    pub fn key_of(&self, record: &R) -> GroupKey {
        match self {
            KeySelector::Field(name) => record.field(name),
            KeySelector::KeyFn(f) => f(record),
        }
    }
}

impl<R: ?Sized> From<&str> for KeySelector<'_, R> {
    fn from(name: &str) -> Self {
        KeySelector::Field(name.to_string())
    }
}

impl<R: ?Sized> From<String> for KeySelector<'_, R> {
    fn from(name: String) -> Self {
        KeySelector::Field(name)
    }
}

impl<'f, R: ?Sized + 'f> TryFrom<&Value> for KeySelector<'f, R> {
    type Error = GroupError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        KeySelector::from_json(value)
    }
}

impl<R: ?Sized> fmt::Debug for KeySelector<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            KeySelector::KeyFn(_) => f.write_str("KeyFn(..)"),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
