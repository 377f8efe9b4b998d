//! A small, permissive JSON reader with typed value access.
//!
//! `jsonpluck` parses a stream of characters into a tagged [`Value`] tree and
//! lets callers pluck typed data back out of it through checked accessors.
//! It is deliberately forgiving about the documents it accepts: escape
//! sequences are copied through verbatim, numeric tokens are read with plain
//! base-10 integer conversion, and anything after the top-level value is
//! never inspected. What it is strict about is access: asking a value for a
//! payload it does not hold is always an error, never a coercion.
//!
//! Input comes from any [`Source`] — a sequential, peekable supply of
//! characters. [`StrSource`] covers the common case of a document already in
//! memory, and [`parse_str`] wraps it for one-call use:
//!
//! ```
//! use jsonpluck::{Object, parse_str};
//!
//! let value = parse_str(r#"{"name": "ada", "port": 8080, "tags": ["a", "b"]}"#)?;
//! let root = Object::try_from(value)?;
//!
//! assert_eq!(root.get::<String>("name")?, Some("ada".into()));
//! assert_eq!(root.require::<i64>("port")?, 8080);
//! assert_eq!(root.get::<i64>("missing")?, None);
//! # Ok::<(), jsonpluck::Error>(())
//! ```
//!
//! Accessors come in two tiers: the `get` family returns `Ok(None)` for
//! absent or `null` entries, while the `require` family treats absence as an
//! error. Both fail with a type mismatch when an entry is present under the
//! wrong tag. Domain types can hook into lookup directly by implementing
//! [`FromObject`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod object;
mod parser;
mod source;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use object::{FromObject, Object};
pub use parser::{parse, parse_as, parse_str};
pub use source::{END_OF_INPUT, Source, StrSource};
pub use value::{ObjectContent, Payload, Value, ValueType};
