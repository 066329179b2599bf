//! Error types for conversion failures
//!
//! Protocol errors are ordinary data carried in the second slot of a
//! [`Converted`](crate::foundation::Converted) pair. An error is either an
//! atomic message or a composite tree mirroring the shape of the input that
//! produced it: a keyed tree for mapping-shaped values, a sparse
//! index-to-error list for sequences.
//!
//! Atomic messages use `Cow<'static, str>` for zero-allocation in the
//! common case of static error text.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde_json::Value;

// ============================================================================
// CONVERT ERROR
// ============================================================================

/// A conversion error: an atomic message or a recursive error tree.
///
/// Composite variants contain entries for failing keys/indices only, in the
/// deterministic order the producing combinator evaluated them. Their
/// key/index set is always a subset of the corresponding output value's
/// key/index set.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::ConvertError;
///
/// // Atomic, static message, zero allocation:
/// let error = ConvertError::message("Missing value");
///
/// // Keyed tree, as produced by the Struct combinator:
/// let error = ConvertError::mapping([
///     ("username", ConvertError::message("Missing value")),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Atomic error message, possibly already localized.
    Message(Cow<'static, str>),

    /// Per-key errors for a mapping-shaped value. Failing keys only.
    Mapping(Vec<(String, ConvertError)>),

    /// Sparse per-index errors for a sequence-shaped value, in ascending
    /// index order. Indices refer to input positions, before any
    /// null-dropping filter is applied.
    Sequence(Vec<(usize, ConvertError)>),
}

impl ConvertError {
    /// Creates an atomic error from a message.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Message(message.into())
    }

    /// Creates a keyed error tree from `(key, error)` entries.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConvertError)>,
    {
        Self::Mapping(entries.into_iter().map(|(k, e)| (k.into(), e)).collect())
    }

    /// Creates a sparse indexed error tree from `(index, error)` entries.
    pub fn sequence<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, ConvertError)>,
    {
        Self::Sequence(entries.into_iter().collect())
    }

    /// Returns the atomic message, if this error is atomic.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the nested error for `key`, if any.
    #[must_use]
    pub fn at_key(&self, key: &str) -> Option<&ConvertError> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, e)| e),
            _ => None,
        }
    }

    /// Returns the nested error for sequence position `index`, if any.
    #[must_use]
    pub fn at_index(&self, index: usize) -> Option<&ConvertError> {
        match self {
            Self::Sequence(entries) => entries.iter().find(|(i, _)| *i == index).map(|(_, e)| e),
            _ => None,
        }
    }

    /// Returns true if this error is a composite tree.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !matches!(self, Self::Message(_))
    }

    /// Returns the number of atomic messages in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Message(_) => 1,
            Self::Mapping(entries) => entries.iter().map(|(_, e)| e.leaf_count()).sum(),
            Self::Sequence(entries) => entries.iter().map(|(_, e)| e.leaf_count()).sum(),
        }
    }

    /// Converts the error tree to a JSON value: messages become strings,
    /// composites become objects keyed by field name or stringified index.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Message(message) => Value::String(message.to_string()),
            Self::Mapping(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, e)| (k.clone(), e.to_json()))
                    .collect(),
            ),
            Self::Sequence(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(i, e)| (i.to_string(), e.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, error)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {error}")?;
                }
                write!(f, "}}")
            }
            Self::Sequence(entries) => {
                write!(f, "[")?;
                for (i, (index, error)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{index}: {error}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<&'static str> for ConvertError {
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for ConvertError {
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

impl serde::Serialize for ConvertError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(message) => serializer.serialize_str(message),
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, error) in entries {
                    map.serialize_entry(key, error)?;
                }
                map.end()
            }
            Self::Sequence(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (index, error) in entries {
                    map.serialize_entry(&index.to_string(), error)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// CHECK ERROR
// ============================================================================

/// Boundary error returned by [`check`](crate::foundation::check): a failed
/// conversion with both halves of the result pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error} for: {value}")]
pub struct CheckError {
    /// Best-effort value at the point of failure.
    pub value: Value,
    /// The protocol error describing the failure.
    pub error: ConvertError,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_atomic_message() {
        let error = ConvertError::message("Missing value");
        assert_eq!(error.as_message(), Some("Missing value"));
        assert!(!error.is_composite());
        assert_eq!(error.to_string(), "Missing value");
    }

    #[test]
    fn test_zero_alloc_static_message() {
        let error = ConvertError::message("Missing value");
        assert!(matches!(error, ConvertError::Message(Cow::Borrowed(_))));
    }

    #[test]
    fn test_keyed_tree() {
        let error = ConvertError::mapping([
            ("username", ConvertError::message("Missing value")),
            ("password", ConvertError::message("Password mismatch")),
        ]);
        assert!(error.is_composite());
        assert_eq!(
            error.at_key("username").and_then(ConvertError::as_message),
            Some("Missing value"),
        );
        assert_eq!(error.at_key("email"), None);
        assert_eq!(error.leaf_count(), 2);
    }

    #[test]
    fn test_sparse_indexed_tree() {
        let error =
            ConvertError::sequence([(2, ConvertError::message("Value must be an integer"))]);
        assert_eq!(
            error.at_index(2).and_then(ConvertError::as_message),
            Some("Value must be an integer"),
        );
        assert_eq!(error.at_index(0), None);
    }

    #[test]
    fn test_nested_tree_display() {
        let error = ConvertError::mapping([(
            "items",
            ConvertError::sequence([(1, ConvertError::message("bad"))]),
        )]);
        assert_eq!(error.to_string(), "{items: [1: bad]}");
        assert_eq!(error.leaf_count(), 1);
    }

    #[test]
    fn test_to_json() {
        let error = ConvertError::mapping([(
            "items",
            ConvertError::sequence([(1, ConvertError::message("bad"))]),
        )]);
        assert_eq!(error.to_json(), json!({"items": {"1": "bad"}}));
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let error = ConvertError::mapping([("a", ConvertError::message("bad"))]);
        let serialized = serde_json::to_value(&error).unwrap();
        assert_eq!(serialized, error.to_json());
    }

    #[test]
    fn test_check_error_display() {
        let error = CheckError {
            value: json!("root"),
            error: ConvertError::message("Invalid domain name"),
        };
        assert_eq!(error.to_string(), "Invalid domain name for: \"root\"");
    }
}
