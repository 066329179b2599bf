//! The conversion result pair
//!
//! Every conversion returns both a best-effort value and an optional error.
//! The value is never discarded on failure, so invalid input stays
//! inspectable and displayable by callers.

use serde_json::Value;

use crate::foundation::error::{CheckError, ConvertError};

// ============================================================================
// CONVERTED
// ============================================================================

/// Result pair of a conversion: `(value, error)`.
///
/// `error` is `None` exactly when the conversion succeeded. On failure,
/// `value` holds the best-effort value at the point of failure.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::Converted;
/// use serde_json::json;
///
/// let ok = Converted::ok(json!(42));
/// assert!(ok.is_ok());
///
/// let failed = Converted::fail(json!("42,75"), "Value must be an integer".into());
/// assert!(failed.is_err());
/// assert_eq!(failed.value, json!("42,75")); // best-effort value kept
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    /// Converted value, or the best-effort value when `error` is set.
    pub value: Value,
    /// The protocol error, absent on success.
    pub error: Option<ConvertError>,
}

impl Converted {
    /// Creates a successful result.
    #[must_use]
    pub fn ok(value: Value) -> Self {
        Self { value, error: None }
    }

    /// Creates a failed result keeping the best-effort value.
    #[must_use]
    pub fn fail(value: Value, error: ConvertError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// Returns true if the conversion succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if the conversion failed.
    #[must_use]
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Splits the result into its `(value, error)` halves.
    #[must_use]
    pub fn into_pair(self) -> (Value, Option<ConvertError>) {
        (self.value, self.error)
    }

    /// Extracts the bare success value, or fails with a [`CheckError`]
    /// carrying both halves of the pair. Boundary adapter for callers that
    /// want conventional fail-fast semantics.
    pub fn check(self) -> Result<Value, CheckError> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(CheckError {
                value: self.value,
                error,
            }),
        }
    }

    /// Like [`check`](Self::check), but swallows the error and yields `Null`.
    #[must_use]
    pub fn check_or_null(self) -> Value {
        match self.error {
            None => self.value,
            Some(_) => Value::Null,
        }
    }
}

impl From<(Value, Option<ConvertError>)> for Converted {
    fn from((value, error): (Value, Option<ConvertError>)) -> Self {
        Self { value, error }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_pair() {
        let result = Converted::ok(json!(42));
        assert!(result.is_ok());
        assert_eq!(result.into_pair(), (json!(42), None));
    }

    #[test]
    fn test_failed_pair_keeps_value() {
        let result = Converted::fail(json!("  "), ConvertError::message("Missing value"));
        assert!(result.is_err());
        assert_eq!(result.value, json!("  "));
    }

    #[test]
    fn test_check() {
        assert_eq!(Converted::ok(json!(1)).check().unwrap(), json!(1));

        let err = Converted::fail(json!("x"), ConvertError::message("bad"))
            .check()
            .unwrap_err();
        assert_eq!(err.value, json!("x"));
        assert_eq!(err.error, ConvertError::message("bad"));
    }

    #[test]
    fn test_check_or_null() {
        assert_eq!(Converted::ok(json!(1)).check_or_null(), json!(1));
        assert_eq!(
            Converted::fail(json!("x"), ConvertError::message("bad")).check_or_null(),
            Value::Null,
        );
    }
}
