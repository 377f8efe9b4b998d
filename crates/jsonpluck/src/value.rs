//! Tagged JSON values and checked payload extraction.
//!
//! [`Value`] is the in-memory form of a parsed document: one tag from
//! [`ValueType`] paired with the payload that tag stands for. The enum is the
//! single construction path, so a tag can never disagree with the payload it
//! carries.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt;

use crate::error::{Error, Result};

/// The raw key/value content of a JSON object.
///
/// Keys are unique; iteration order is the map's and is not part of the
/// contract beyond lookup by key.
pub type ObjectContent = BTreeMap<String, Value>;

/// Discriminant identifying which payload shape a [`Value`] holds.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// An integral number.
    Int,
    /// A string.
    String,
    /// An array (can contain a mixture of types).
    Array,
    /// A boolean value.
    Bool,
    /// An object.
    Object,
    /// The special value `null`.
    Null,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Null => "null",
        })
    }
}

/// A parsed JSON value.
///
/// Values are plain, independently-owned trees: an array or object owns its
/// elements outright, and cloning a value clones the whole tree. `Null`
/// carries no payload at all — the tag alone is authoritative.
///
/// # Examples
///
/// ```
/// use jsonpluck::{Value, ValueType};
///
/// let value = Value::Int(7);
/// assert!(value.is(ValueType::Int));
/// assert_eq!(value.cast::<i64>(), Ok(7));
/// assert!(value.cast::<String>().is_err());
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integral number, read with base-10 conversion only.
    Int(i64),
    /// A string; escaped characters are stored verbatim, uninterpreted.
    String(String),
    /// An ordered sequence of values, heterogeneous by design.
    Array(Vec<Value>),
    /// A boolean.
    Bool(bool),
    /// An object.
    Object(ObjectContent),
    /// The JSON `null`.
    Null,
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Int(_) => ValueType::Int,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Bool(_) => ValueType::Bool,
            Self::Object(_) => ValueType::Object,
            Self::Null => ValueType::Null,
        }
    }

    /// Returns whether the tag equals `value_type`. Never fails.
    #[must_use]
    pub fn is(&self, value_type: ValueType) -> bool {
        self.value_type() == value_type
    }

    /// Returns the payload interpreted as `T`.
    ///
    /// The tag must correspond to `T`; there is no coercion between payload
    /// shapes, so asking an `Int`-tagged value for a `String` fails even
    /// though either could "represent" the other.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the tag does not correspond to `T`.
    pub fn cast<T: Payload>(&self) -> Result<T> {
        T::extract(self).cloned().ok_or(Error::TypeMismatch {
            expected: T::TYPE,
            found: self.value_type(),
        })
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<ObjectContent> for Value {
    fn from(v: ObjectContent) -> Self {
        Self::Object(v)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Maps a payload shape to its [`ValueType`] tag and extracts it from a
/// [`Value`].
///
/// Implemented by exactly the five payload types — [`i64`], [`String`],
/// [`Vec<Value>`], [`bool`] and [`ObjectContent`] — and sealed against
/// others. `Null` has no payload and therefore no `Payload` type: a `Null`
/// tag is a mismatch for every extraction.
pub trait Payload: sealed::Sealed + Clone {
    /// The tag a value must hold for extraction to succeed.
    const TYPE: ValueType;

    /// Borrows the payload when the value's tag matches [`Self::TYPE`].
    fn extract(value: &Value) -> Option<&Self>;

    /// Moves the payload out of `value`, handing the value back unchanged
    /// when the tag does not match.
    fn extract_into(value: Value) -> core::result::Result<Self, Value>;
}

macro_rules! payload {
    ($payload:ty, $tag:ident) => {
        impl sealed::Sealed for $payload {}

        impl Payload for $payload {
            const TYPE: ValueType = ValueType::$tag;

            fn extract(value: &Value) -> Option<&Self> {
                if let Value::$tag(payload) = value {
                    Some(payload)
                } else {
                    None
                }
            }

            fn extract_into(value: Value) -> core::result::Result<Self, Value> {
                if let Value::$tag(payload) = value {
                    Ok(payload)
                } else {
                    Err(value)
                }
            }
        }
    };
}

payload!(i64, Int);
payload!(String, String);
payload!(Vec<Value>, Array);
payload!(bool, Bool);
payload!(ObjectContent, Object);
