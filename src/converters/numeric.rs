//! Numeric converters and range tests.

use std::borrow::Cow;

use serde_json::{Number, Value};

use crate::adapters::test;
use crate::combinators::Pipe;
use crate::foundation::{Context, Convert, ConvertError, Converted};

use super::string::cleanup_line;
use super::Leaf;

fn number_of(value: &Value, what: &str) -> f64 {
    value
        .as_f64()
        .unwrap_or_else(|| panic!("{what} expects a number, got: {value}"))
}

/// Converts numbers, numeric strings and booleans to an integer.
///
/// Fractional input is truncated toward zero, matching `as i64` casts.
#[must_use]
pub fn anything_to_int() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| {
        let parsed = match &value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|x| x as i64)),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|x| x as i64))
            }
            _ => None,
        };
        match parsed {
            Some(n) => Converted::ok(Value::Number(Number::from(n))),
            None => Converted::fail(
                value,
                ConvertError::Message(ctx.localize(Cow::Borrowed("Value must be an integer"))),
            ),
        }
    })
}

/// Converts numbers, numeric strings and booleans to a float.
#[must_use]
pub fn anything_to_float() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| {
        let parsed = match &value {
            Value::Number(n) => n.as_f64(),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed.and_then(Number::from_f64) {
            Some(n) => Converted::ok(Value::Number(n)),
            None => Converted::fail(
                value,
                ConvertError::Message(ctx.localize(Cow::Borrowed("Value must be a float"))),
            ),
        }
    })
}

/// Strips a string, then converts like [`anything_to_int`].
#[must_use]
pub fn input_to_int() -> Pipe {
    cleanup_line().then(anything_to_int())
}

/// Strips a string, then converts like [`anything_to_float`].
#[must_use]
pub fn input_to_float() -> Pipe {
    cleanup_line().then(anything_to_float())
}

/// Accepts only numbers between the two bounds, included.
#[must_use]
pub fn test_between(min: f64, max: f64) -> impl Convert {
    test(move |value: &Value| {
        let n = number_of(value, "test_between");
        min <= n && n <= max
    })
    .with_error(format!("Value must be between {min} and {max}"))
}

/// Accepts only values equal to `constant`. A Null constant disables the
/// comparison.
#[must_use]
pub fn test_equals(constant: Value) -> impl Convert {
    let message = format!("Value must be equal to {}", display_value(&constant));
    test(move |value: &Value| constant.is_null() || *value == constant).with_error(message)
}

/// Accepts only numbers greater than or equal to `constant`.
#[must_use]
pub fn test_greater_or_equal(constant: f64) -> impl Convert {
    test(move |value: &Value| number_of(value, "test_greater_or_equal") >= constant)
        .with_error(format!("Value must be greater than or equal to {constant}"))
}

/// Accepts only numbers less than or equal to `constant`.
#[must_use]
pub fn test_less_or_equal(constant: f64) -> impl Convert {
    test(move |value: &Value| number_of(value, "test_less_or_equal") <= constant)
        .with_error(format!("Value must be less than or equal to {constant}"))
}

/// Accepts only values belonging to `values`.
#[must_use]
pub fn test_in(values: Vec<Value>) -> impl Convert {
    let listed = Value::Array(values.clone()).to_string();
    test(move |value: &Value| values.contains(value))
        .with_error(format!("Value must belong to {listed}"))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
