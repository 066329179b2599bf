//! Boolean converters.

use std::borrow::Cow;

use serde_json::Value;

use crate::adapters::function;
use crate::foundation::{is_truthy, Context, Convert, ConvertError, Converted};

use super::Leaf;

/// Converts any value to a boolean by truthiness. Null stays Null.
#[must_use]
pub fn anything_to_bool() -> impl Convert {
    function(|value| Value::Bool(is_truthy(&value)))
}

/// Converts a clean numeric string to a boolean: zero is false, any other
/// integer is true.
///
/// For lenient parsing of words like "yes" or "off", see [`guess_bool`].
#[must_use]
pub fn str_to_bool() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| match value {
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(n) => Converted::ok(Value::Bool(n != 0)),
            Err(_) => Converted::fail(
                Value::String(s),
                ConvertError::Message(ctx.localize(Cow::Borrowed("Value must be a boolean"))),
            ),
        },
        other => panic!("str_to_bool expects a string, got: {other}"),
    })
}

/// Converts loosely written boolean input.
///
/// Accepts booleans and numbers as-is (by truthiness), integer strings,
/// and the usual words: "f", "false", "n", "no", "off" and "on", "t",
/// "true", "y", "yes", case-insensitive. Blank strings become Null.
#[must_use]
pub fn guess_bool() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| match value {
        Value::Bool(_) => Converted::ok(value),
        Value::Number(ref n) => Converted::ok(Value::Bool(n.as_f64().is_some_and(|x| x != 0.0))),
        Value::String(s) => {
            let lower = s.trim().to_lowercase();
            if lower.is_empty() {
                return Converted::ok(Value::Null);
            }
            if let Ok(n) = lower.parse::<i64>() {
                return Converted::ok(Value::Bool(n != 0));
            }
            match lower.as_str() {
                "f" | "false" | "n" | "no" | "off" => Converted::ok(Value::Bool(false)),
                "on" | "t" | "true" | "y" | "yes" => Converted::ok(Value::Bool(true)),
                _ => Converted::fail(
                    Value::String(s),
                    ConvertError::Message(ctx.localize(Cow::Borrowed("Value must be a boolean"))),
                ),
            }
        }
        other => panic!("guess_bool expects a boolean, number or string, got: {other}"),
    })
}

// ============================================================================
// TESTS
// ============================================================================
