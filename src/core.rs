//! Core traits and types for grouping.
//!
//! This module defines:
//! - [`GroupKey`]: the comparable representation of a derived grouping key.
//! - [`Record`]: the trait used to look a field up when grouping by field name.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use serde_json::{Map, Value};

/// A derived grouping key.
///
/// Keys of the same kind are ordered naturally (numbers numerically, text
/// byte-wise). [`GroupKey::Missing`] is produced when a record has no value for
/// the selected field, including an explicit JSON `null`; it forms a group of
/// its own and always sorts last.
///
/// Integers are kept exactly in [`GroupKey::Int`]; [`GroupKey::Number`] holds
/// floating point values. Both are number keys and compare with each other by
/// value, so `Int(1)` and `Number(1.0)` are the same key.
#[derive(Clone, Debug)]
pub enum GroupKey {
    /// The record has no value for the selected field.
    Missing,
    Bool(bool),
    Int(i128),
    Number(f64),
    Text(String),
}

/// The kind of a [`GroupKey`], used to decide whether two keys can be ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Missing,
    Bool,
    Number,
    Text,
}

// 2^127, the first float past the i128 range.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

impl GroupKey {
    pub fn kind(&self) -> KeyKind {
        match self {
            GroupKey::Missing => KeyKind::Missing,
            GroupKey::Bool(_) => KeyKind::Bool,
            GroupKey::Int(_) | GroupKey::Number(_) => KeyKind::Number,
            GroupKey::Text(_) => KeyKind::Text,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, GroupKey::Missing)
    }

    /// Returns the numeric value, if this is a number key. Large integers are
    /// rounded.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GroupKey::Int(i) => Some(*i as f64),
            GroupKey::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the exact integer value of an integral number key.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            GroupKey::Int(i) => Some(*i),
            GroupKey::Number(n) => integral(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GroupKey::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Orders two keys, or returns `None` when they have no order relative to
    /// each other (different kinds, or a NaN number).
    ///
    /// `Missing` is comparable with every key and sorts after all of them.
    pub fn partial_order(&self, other: &GroupKey) -> Option<Ordering> {
        match (self, other) {
            (GroupKey::Missing, GroupKey::Missing) => Some(Ordering::Equal),
            (GroupKey::Missing, _) => Some(Ordering::Greater),
            (_, GroupKey::Missing) => Some(Ordering::Less),
            (GroupKey::Bool(a), GroupKey::Bool(b)) => Some(a.cmp(b)),
            (GroupKey::Int(a), GroupKey::Int(b)) => Some(a.cmp(b)),
            (GroupKey::Number(a), GroupKey::Number(b)) => a.partial_cmp(b),
            (GroupKey::Int(a), GroupKey::Number(b)) => compare_int_float(*a, *b),
            (GroupKey::Number(a), GroupKey::Int(b)) => {
                compare_int_float(*b, *a).map(Ordering::reverse)
            }
            (GroupKey::Text(a), GroupKey::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            _ => None,
        }
    }

    /// Bit pattern used for float equality and hashing; folds `-0.0` into `0.0`.
    #[inline]
    fn number_bits(n: f64) -> u64 {
        if n == 0.0 { 0 } else { n.to_bits() }
    }
}

/// The exact integer value of `n`, when it has one inside the `i128` range.
fn integral(n: f64) -> Option<i128> {
    if n.is_finite() && n.fract() == 0.0 && (-I128_BOUND..I128_BOUND).contains(&n) {
        Some(n as i128)
    } else {
        None
    }
}

fn compare_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    match (int as f64).partial_cmp(&float)? {
        // Rounding can make distinct values look equal; `float` is integral here,
        // and only 2^127 itself falls outside the i128 range.
        Ordering::Equal => match integral(float) {
            Some(exact) => Some(int.cmp(&exact)),
            None => Some(Ordering::Less),
        },
        other => Some(other),
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GroupKey::Missing, GroupKey::Missing) => true,
            (GroupKey::Bool(a), GroupKey::Bool(b)) => a == b,
            (GroupKey::Int(a), GroupKey::Int(b)) => a == b,
            (GroupKey::Number(a), GroupKey::Number(b)) => {
                Self::number_bits(*a) == Self::number_bits(*b)
            }
            (GroupKey::Int(a), GroupKey::Number(b)) | (GroupKey::Number(b), GroupKey::Int(a)) => {
                integral(*b) == Some(*a)
            }
            (GroupKey::Text(a), GroupKey::Text(b)) => a == b,
            _ => false,
        }
    }
}

// NaN keys compare equal to each other so that they land in one bucket.
impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            GroupKey::Missing => {}
            GroupKey::Bool(b) => b.hash(state),
            // Integral floats hash like the equal `Int`.
            GroupKey::Int(i) => (0u8, *i).hash(state),
            GroupKey::Number(n) => match integral(*n) {
                Some(i) => (0u8, i).hash(state),
                None => (1u8, Self::number_bits(*n)).hash(state),
            },
            GroupKey::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Missing => f.write_str("missing"),
            GroupKey::Bool(b) => write!(f, "{b}"),
            GroupKey::Int(i) => write!(f, "{i}"),
            GroupKey::Number(n) => write!(f, "{n}"),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Missing => "missing",
            KeyKind::Bool => "bool",
            KeyKind::Number => "number",
            KeyKind::Text => "text",
        };
        f.write_str(name)
    }
}

impl From<&Value> for GroupKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => GroupKey::Missing,
            Value::Bool(b) => GroupKey::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    GroupKey::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    GroupKey::Int(i128::from(u))
                } else {
                    n.as_f64().map(GroupKey::Number).unwrap_or(GroupKey::Missing)
                }
            }
            Value::String(s) => GroupKey::Text(s.clone()),
            // Compound values group by their compact JSON text.
            Value::Array(_) | Value::Object(_) => GroupKey::Text(value.to_string()),
        }
    }
}

impl From<Value> for GroupKey {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => GroupKey::Text(s),
            other => GroupKey::from(&other),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        GroupKey::Text(value.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        GroupKey::Text(value)
    }
}

impl From<&String> for GroupKey {
    fn from(value: &String) -> Self {
        GroupKey::Text(value.clone())
    }
}

impl From<bool> for GroupKey {
    fn from(value: bool) -> Self {
        GroupKey::Bool(value)
    }
}

macro_rules! int_key_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GroupKey {
                fn from(value: $ty) -> Self {
                    GroupKey::Int(value as i128)
                }
            }
        )*
    };
}

int_key_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for GroupKey {
    fn from(value: f32) -> Self {
        GroupKey::Number(f64::from(value))
    }
}

impl From<f64> for GroupKey {
    fn from(value: f64) -> Self {
        GroupKey::Number(value)
    }
}

impl<T: Into<GroupKey>> From<Option<T>> for GroupKey {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(GroupKey::Missing)
    }
}

/// A record that can be grouped by field name.
///
/// Grouping with a key function works for any type; this trait is only needed
/// when a [`KeySelector::Field`](crate::KeySelector::Field) is used.
///
/// # Examples
///
/// ```
/// use rhymebucket::{GroupKey, Record};
///
/// struct Player {
///     name: String,
///     team: String,
/// }
///
/// impl Record for Player {
///     fn field(&self, name: &str) -> GroupKey {
///         match name {
///             "name" => GroupKey::from(&self.name),
///             "team" => GroupKey::from(&self.team),
///             _ => GroupKey::Missing,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of `name`, or [`GroupKey::Missing`] when there is none.
    fn field(&self, name: &str) -> GroupKey;
}

impl Record for Value {
    fn field(&self, name: &str) -> GroupKey {
        match self {
            Value::Object(map) => map.field(name),
            _ => GroupKey::Missing,
        }
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> GroupKey {
        self.get(name).map(GroupKey::from).unwrap_or(GroupKey::Missing)
    }
}

impl<V, S> Record for HashMap<String, V, S>
where
    V: Clone + Into<GroupKey>,
    S: BuildHasher,
{
    fn field(&self, name: &str) -> GroupKey {
        self.get(name).cloned().into()
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<GroupKey>,
{
    fn field(&self, name: &str) -> GroupKey {
        self.get(name).cloned().into()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> GroupKey {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> GroupKey {
        (**self).field(name)
    }
}
