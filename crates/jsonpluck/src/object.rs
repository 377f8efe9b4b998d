//! The typed-access wrapper around parsed JSON objects.

use alloc::string::ToString;

use crate::{
    error::{Error, Result},
    value::{ObjectContent, Payload, Value, ValueType},
};

/// A JSON object with typed, checked lookup.
///
/// `Object` wraps [`ObjectContent`] and adds two tiers of read-only access:
/// the `get` family, which answers `Ok(None)` for keys that are absent or
/// mapped to `null`, and the `require` family, which treats absence as an
/// error. Both tiers fail with a type mismatch when a key is present under
/// the wrong tag — an absent or `null` key never does.
///
/// # Examples
///
/// ```
/// use jsonpluck::{Object, parse_str};
///
/// let root = Object::try_from(parse_str(r#"{"retries": 3, "label": null}"#)?)?;
/// assert_eq!(root.get::<i64>("retries")?, Some(3));
/// // A null entry and a missing entry read the same through `get`.
/// assert_eq!(root.get::<String>("label")?, None);
/// assert_eq!(root.get::<String>("comment")?, None);
/// # Ok::<(), jsonpluck::Error>(())
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    /// The raw content of this object.
    pub content: ObjectContent,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload mapped to `name`, or `None` when the key is
    /// absent or mapped to `null`.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the key is present, non-null and tagged
    /// with anything other than `T`'s tag.
    pub fn get<T: Payload>(&self, name: &str) -> Result<Option<T>> {
        match self.content.get(name) {
            Some(value) if !value.is(ValueType::Null) => value.cast().map(Some),
            _ => Ok(None),
        }
    }

    /// As [`get`](Self::get) for an object-tagged entry, wrapping the result.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the key is present, non-null and not an
    /// object.
    pub fn get_object(&self, name: &str) -> Result<Option<Object>> {
        Ok(self.get::<ObjectContent>(name)?.map(Object::from))
    }

    /// Returns the payload mapped to `name`, with no tolerant path: the key
    /// must be present and carry exactly `T`'s tag.
    ///
    /// A `null` entry is a mismatch here, not an absence — `null` matches no
    /// payload type.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] when the key is absent, and
    /// [`Error::TypeMismatch`] when it is present under a different tag.
    pub fn require<T: Payload>(&self, name: &str) -> Result<T> {
        match self.content.get(name) {
            Some(value) => value.cast(),
            None => Err(Error::KeyNotFound {
                key: name.to_string(),
            }),
        }
    }

    /// As [`require`](Self::require) for an object-tagged entry, wrapping
    /// the result.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] when the key is absent, and
    /// [`Error::TypeMismatch`] when it is present and not an object.
    pub fn require_object(&self, name: &str) -> Result<Object> {
        self.require::<ObjectContent>(name).map(Object::from)
    }

    /// Looks up an object-valued key and builds `T` from it.
    ///
    /// This is the mapping hook for domain types: anything implementing
    /// [`FromObject`] can be pulled out of a sub-object in one step. Absent
    /// and `null` keys answer `Ok(None)`; whatever error `T`'s factory
    /// returns propagates unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the key is present, non-null and not an
    /// object, plus anything `T::from_object` reports.
    pub fn get_as<T: FromObject>(&self, name: &str) -> Result<Option<T>> {
        match self.get_object(name)? {
            Some(object) => T::from_object(object).map(Some),
            None => Ok(None),
        }
    }
}

impl From<ObjectContent> for Object {
    fn from(content: ObjectContent) -> Self {
        Self { content }
    }
}

impl TryFrom<Value> for Object {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        ObjectContent::extract_into(value)
            .map(Self::from)
            .map_err(|value| Error::TypeMismatch {
                expected: ValueType::Object,
                found: value.value_type(),
            })
    }
}

/// Types constructible from a parsed JSON [`Object`].
///
/// Implementing this trait opts a domain type into
/// [`Object::get_as`], which performs one level of structural mapping from a
/// JSON sub-object onto the type:
///
/// ```
/// use jsonpluck::{Error, FromObject, Object, parse_str};
///
/// struct Endpoint {
///     host: String,
///     port: i64,
/// }
///
/// impl FromObject for Endpoint {
///     fn from_object(object: Object) -> Result<Self, Error> {
///         Ok(Self {
///             host: object.require("host")?,
///             port: object.require("port")?,
///         })
///     }
/// }
///
/// let root = Object::try_from(parse_str(r#"{"api": {"host": "::1", "port": 80}}"#)?)?;
/// let api = root.get_as::<Endpoint>("api")?.unwrap();
/// assert_eq!(api.host, "::1");
/// assert_eq!(api.port, 80);
/// # Ok::<(), jsonpluck::Error>(())
/// ```
pub trait FromObject: Sized {
    /// Builds `Self` from the given object.
    ///
    /// # Errors
    ///
    /// Whatever the implementation considers a malformed object; errors
    /// surface through [`Object::get_as`] unchanged.
    fn from_object(object: Object) -> Result<Self>;
}

impl FromObject for Object {
    fn from_object(object: Object) -> Result<Self> {
        Ok(object)
    }
}
