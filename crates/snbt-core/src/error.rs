//! Error types for SNBT construction, conversion and parsing.

use crate::tag::Kind;
use thiserror::Error;

/// Errors that can occur while building, converting or parsing tags.
///
/// Every variant is terminal for the call that produced it: no container is
/// left half-modified and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnbtError {
    /// A numeric value lies outside the declared bounds of its kind.
    #[error("{value} is out of range for {kind} ({min} to {max})")]
    Range {
        kind: Kind,
        value: String,
        min: String,
        max: String,
    },

    /// Text does not have the shape of a literal of the expected kind.
    #[error("malformed {kind} literal {text:?}: {reason}")]
    MalformedLiteral {
        kind: Kind,
        text: String,
        reason: String,
    },

    /// The input could not be tokenized (bad escape, unterminated string,
    /// stray character). `pos` is the byte offset into the input.
    #[error("SNBT lexical error at position {pos}: {message}")]
    Lexical { pos: usize, message: String },

    /// The tokens do not match any production of the grammar, or the text
    /// reached an entry point it is not valid for.
    #[error("SNBT grammar error at position {pos}: {message}")]
    Grammar { pos: usize, message: String },

    /// A dtype-constrained container or cast received an incompatible kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// A key that the target map dialect cannot represent.
    #[error("invalid key {key:?}: {reason}")]
    Key { key: String, reason: String },

    /// A sequence index past the end.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A host value with no tag equivalent (e.g. JSON `null`).
    #[error("cannot convert {0} to a tag")]
    Unsupported(String),
}

impl SnbtError {
    pub(crate) fn range(kind: Kind, value: impl ToString, min: impl ToString, max: impl ToString) -> Self {
        SnbtError::Range {
            kind,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub(crate) fn malformed(kind: Kind, text: &str, reason: impl Into<String>) -> Self {
        SnbtError::MalformedLiteral {
            kind,
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(expected: Kind, found: Kind) -> Self {
        SnbtError::TypeMismatch { expected, found }
    }
}

/// Convenience alias used throughout snbt-core.
pub type Result<T> = std::result::Result<T, SnbtError>;
