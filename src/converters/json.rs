//! JSON text converters.

use std::borrow::Cow;

use serde_json::Value;

use crate::combinators::Pipe;
use crate::foundation::{Context, Convert, ConvertError, Converted};

use super::string::cleanup_line;
use super::Leaf;

/// Parses a clean string as JSON.
///
/// The string `"null"` decodes to Null, indistinguishable from an absent
/// value downstream.
#[must_use]
pub fn str_to_json() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| match value {
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(decoded) => Converted::ok(decoded),
            Err(_) => Converted::fail(
                Value::String(s),
                ConvertError::Message(ctx.localize(Cow::Borrowed("Invalid JSON"))),
            ),
        },
        other => panic!("str_to_json expects a string, got: {other}"),
    })
}

/// Serializes any value to compact JSON text.
#[must_use]
pub fn json_to_str() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| match serde_json::to_string(&value) {
        Ok(text) => Converted::ok(Value::String(text)),
        Err(_) => Converted::fail(
            value,
            ConvertError::Message(ctx.localize(Cow::Borrowed("Invalid JSON"))),
        ),
    })
}

/// Strips a string with [`cleanup_line`], then parses like
/// [`str_to_json`]. Blank input becomes Null without error.
#[must_use]
pub fn input_to_json() -> Pipe {
    cleanup_line().then(str_to_json())
}

// ============================================================================
// TESTS
// ============================================================================
