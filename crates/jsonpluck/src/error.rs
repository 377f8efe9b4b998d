use alloc::string::String;

use crate::value::ValueType;

/// The single error type for parsing and typed access.
///
/// Nothing in this crate recovers from an error locally; every failure
/// carries its diagnostic payload to the direct caller and aborts the
/// operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An expected delimiter was not the next character in the stream.
    ///
    /// `found` is [`END_OF_INPUT`](crate::END_OF_INPUT) when the source was
    /// exhausted; `position` is the 1-based character position of the
    /// mismatch.
    #[error("expected {expected:?}, got {found:?}, position: {position}")]
    Structural {
        /// The character the grammar required next.
        expected: char,
        /// The character actually observed.
        found: char,
        /// 1-based position in the stream.
        position: u64,
    },

    /// A typed accessor was invoked against a value holding a different tag.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The tag the accessor asked for.
        expected: ValueType,
        /// The tag the value actually holds.
        found: ValueType,
    },

    /// A `require`-tier accessor was invoked for an absent key.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
