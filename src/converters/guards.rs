//! Presence and shape guards.
//!
//! Guards turn would-be panics into protocol errors: placed early in a
//! pipe, they let later stages assume the checked shape.

use serde_json::Value;

use crate::adapters::test;
use crate::foundation::Convert;

/// Rejects Null with `"Missing value"`. Everything else passes.
#[must_use]
pub fn require() -> impl Convert {
    test(|value: &Value| !value.is_null())
        .with_error("Missing value")
        .handle_null()
}

/// Rejects anything but Null with `"Unexpected value"`.
#[must_use]
pub fn test_none() -> impl Convert {
    test(|value: &Value| value.is_null()).with_error("Unexpected value")
}

/// Accepts strings only.
#[must_use]
pub fn test_is_string() -> impl Convert {
    test(Value::is_string).with_error("Value is not a string")
}

/// Accepts booleans only.
#[must_use]
pub fn test_is_boolean() -> impl Convert {
    test(Value::is_boolean).with_error("Value is not a boolean")
}

/// Accepts numbers only.
#[must_use]
pub fn test_is_number() -> impl Convert {
    test(Value::is_number).with_error("Value is not a number")
}

/// Accepts objects only.
#[must_use]
pub fn test_is_object() -> impl Convert {
    test(Value::is_object).with_error("Value is not an object")
}

/// Accepts arrays only.
#[must_use]
pub fn test_is_array() -> impl Convert {
    test(Value::is_array).with_error("Value is not an array")
}

// ============================================================================
// TESTS
// ============================================================================
