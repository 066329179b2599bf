//! TEST adapter - wraps a predicate into the converter contract
//!
//! A test never modifies the value: it returns the input unchanged, with an
//! error attached when the predicate rejects it.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Context, Convert, ConvertError, Converted};

// ============================================================================
// TEST ADAPTER
// ============================================================================

/// Wraps a predicate `&Value -> bool` as a converter.
///
/// Success returns the input unchanged; failure returns the input with an
/// error message (default `"Test failed"`), localized through the context.
/// A `Null` input skips the predicate unless
/// [`handle_null`](Self::handle_null) is set.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::test;
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let is_string = test(|v| v.is_string()).with_error("Value is not a string");
/// assert!(is_string.convert_value(json!("hello")).is_ok());
/// assert!(is_string.convert_value(json!(1)).is_err());
/// ```
#[derive(Clone)]
pub struct Test<F> {
    predicate: F,
    error: Cow<'static, str>,
    handle_null: bool,
}

impl<F> Test<F> {
    /// Creates a new test adapter with the default `"Test failed"` message.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            error: Cow::Borrowed("Test failed"),
            handle_null: false,
        }
    }

    /// Overrides the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, error: impl Into<Cow<'static, str>>) -> Self {
        self.error = error.into();
        self
    }

    /// Also invokes the predicate for `Null` input.
    #[must_use = "builder methods must be chained or built"]
    pub fn handle_null(mut self) -> Self {
        self.handle_null = true;
        self
    }
}

impl<F> Convert for Test<F>
where
    F: Fn(&Value, &Context) -> bool + Send + Sync,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        if value.is_null() && !self.handle_null {
            return Converted::ok(value);
        }
        if (self.predicate)(&value, ctx) {
            Converted::ok(value)
        } else {
            let message = ctx.localize(self.error.clone());
            Converted::fail(value, ConvertError::Message(message))
        }
    }
}

/// Wraps a plain predicate as a converter.
pub fn test<F>(predicate: F) -> Test<impl Fn(&Value, &Context) -> bool + Send + Sync>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Test::new(move |value: &Value, _ctx: &Context| predicate(value))
}

/// Wraps a context-aware predicate as a converter.
pub fn test_with_context<F>(predicate: F) -> Test<F>
where
    F: Fn(&Value, &Context) -> bool + Send + Sync,
{
    Test::new(predicate)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_keeps_value() {
        let is_string = test(Value::is_string);
        assert_eq!(
            is_string.convert_value(json!("hello")),
            Converted::ok(json!("hello"))
        );
    }

    #[test]
    fn test_failure_keeps_value_and_default_message() {
        let is_string = test(Value::is_string);
        let result = is_string.convert_value(json!(1));
        assert_eq!(result.value, json!(1));
        assert_eq!(result.error, Some(ConvertError::message("Test failed")));
    }

    #[test]
    fn test_custom_message() {
        let is_string = test(Value::is_string).with_error("Value is not a string");
        assert_eq!(
            is_string.convert_value(json!(1)).error,
            Some(ConvertError::message("Value is not a string")),
        );
    }

    #[test]
    fn test_null_skips_predicate() {
        let rejects_everything = test(|_: &Value| false);
        assert_eq!(
            rejects_everything.convert_value(Value::Null),
            Converted::ok(Value::Null),
        );
    }

    #[test]
    fn test_handle_null_runs_predicate() {
        let not_null = test(|v: &Value| !v.is_null())
            .handle_null()
            .with_error("Missing value");
        assert_eq!(
            not_null.convert_value(Value::Null).error,
            Some(ConvertError::message("Missing value")),
        );
    }

    #[test]
    fn test_message_is_localized() {
        let ctx = Context::builder()
            .with_translator(|m| format!("fr:{m}"))
            .build();
        let failing = test(|_: &Value| false);
        assert_eq!(
            failing.convert(json!(1), &ctx).error,
            Some(ConvertError::message("fr:Test failed")),
        );
    }
}
