//! String cleanup converters.
//!
//! These expect string input (Null always passes through); anything else
//! is a shape error and panics. Guard with
//! [`test_is_string`](super::test_is_string) when the input shape is not
//! already known.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::adapters::function;
use crate::combinators::Pipe;
use crate::foundation::{is_truthy, Context, Convert, Converted};

use super::Leaf;

static NON_SLUG_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").unwrap_or_else(|e| panic!("invalid slug pattern: {e}"))
});

fn expect_string(value: Value, what: &str) -> String {
    match value {
        Value::String(s) => s,
        other => panic!("{what} expects a string, got: {other}"),
    }
}

/// Strips leading and trailing whitespace.
#[must_use]
pub fn trim() -> impl Convert {
    function(|value| Value::String(expect_string(value, "trim").trim().to_owned()))
}

/// Replaces falsy values (`false`, `0`, `""`, `[]`, `{}`) with Null.
#[must_use]
pub fn empty_to_null() -> impl Convert {
    Leaf(|value: Value, _ctx: &Context| {
        if is_truthy(&value) {
            Converted::ok(value)
        } else {
            Converted::ok(Value::Null)
        }
    })
}

/// Strips a single-line string, turning blank input into Null.
#[must_use]
pub fn cleanup_line() -> Pipe {
    crate::pipe![trim(), empty_to_null()]
}

/// Normalizes line endings to `\n`, then strips like [`cleanup_line`].
#[must_use]
pub fn cleanup_text() -> Pipe {
    crate::pipe![
        function(|value| {
            let text = expect_string(value, "cleanup_text");
            Value::String(text.replace("\r\n", "\n").replace('\r', "\n"))
        }),
        cleanup_line(),
    ]
}

/// Converts a string to a lowercase ASCII slug, words joined by `-`.
///
/// Strings with no usable characters become Null.
#[must_use]
pub fn input_to_slug() -> impl Convert {
    Leaf(|value: Value, _ctx: &Context| {
        let text = expect_string(value, "input_to_slug").to_lowercase();
        let slug = NON_SLUG_RUN.replace_all(&text, "-");
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            Converted::ok(Value::Null)
        } else {
            Converted::ok(Value::String(slug.to_owned()))
        }
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Convert;
    use serde_json::json;

    #[test]
    fn test_trim() {
        assert_eq!(trim().convert_value(json!("  hi  ")).value, json!("hi"));
        assert_eq!(trim().convert_value(Value::Null).value, Value::Null);
    }

    #[test]
    fn test_empty_to_null() {
        assert_eq!(empty_to_null().convert_value(json!("")).value, Value::Null);
        assert_eq!(empty_to_null().convert_value(json!(0)).value, Value::Null);
        assert_eq!(empty_to_null().convert_value(json!([])).value, Value::Null);
        assert_eq!(empty_to_null().convert_value(json!("hi")).value, json!("hi"));
    }

    #[test]
    fn test_cleanup_line() {
        let converter = cleanup_line();
        assert_eq!(
            converter.convert_value(json!("   Hello world!   ")).value,
            json!("Hello world!")
        );
        assert_eq!(converter.convert_value(json!("   ")).value, Value::Null);
        assert_eq!(converter.convert_value(Value::Null).value, Value::Null);
    }

    #[test]
    fn test_cleanup_text() {
        let converter = cleanup_text();
        assert_eq!(
            converter.convert_value(json!("   Hello\r\n world!\r   ")).value,
            json!("Hello\n world!")
        );
        assert_eq!(converter.convert_value(json!("   ")).value, Value::Null);
    }

    #[test]
    fn test_input_to_slug() {
        let converter = input_to_slug();
        assert_eq!(
            converter.convert_value(json!("   Hello world!   ")).value,
            json!("hello-world")
        );
        assert_eq!(converter.convert_value(json!("")).value, Value::Null);
        assert_eq!(converter.convert_value(json!("  !?  ")).value, Value::Null);
    }

    #[test]
    #[should_panic(expected = "expects a string")]
    fn test_trim_panics_on_number() {
        let _ = trim().convert_value(json!(42));
    }
}
