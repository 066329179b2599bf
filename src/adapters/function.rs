//! FUNCTION adapter - wraps a plain transform into the converter contract
//!
//! Use [`function`] when the wrapped transform always succeeds. When the
//! transform doesn't modify the value but may reject it, use
//! [`test`](crate::adapters::test) instead; when it both modifies the value
//! and may reject it, implement [`Convert`] directly.

use serde_json::Value;

use crate::foundation::{Context, Convert, Converted};

// ============================================================================
// FUNCTION ADAPTER
// ============================================================================

/// Wraps a total transform `Value -> Value` as a converter.
///
/// Never produces a protocol error. A `Null` input skips the wrapped
/// function and passes through, unless [`handle_null`](Self::handle_null)
/// is set. If the wrapped function panics on an unexpected shape, the panic
/// propagates: the adapter makes no attempt to downgrade it into a protocol
/// error.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::function;
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let double = function(|v| json!(v.as_i64().map_or(0, |n| n * 2)));
/// assert_eq!(double.convert_value(json!(21)).value, json!(42));
/// assert_eq!(double.convert_value(json!(null)).value, json!(null)); // skipped
/// ```
#[derive(Clone, Copy)]
pub struct Function<F> {
    func: F,
    handle_null: bool,
}

impl<F> Function<F> {
    /// Creates a new function adapter.
    pub fn new(func: F) -> Self {
        Self {
            func,
            handle_null: false,
        }
    }

    /// Also invokes the wrapped function for `Null` input.
    ///
    /// The function must be hardened for the absence sentinel; if it isn't,
    /// it will panic, and the panic propagates.
    #[must_use = "builder methods must be chained or built"]
    pub fn handle_null(mut self) -> Self {
        self.handle_null = true;
        self
    }
}

impl<F> Convert for Function<F>
where
    F: Fn(Value, &Context) -> Value + Send + Sync,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        if value.is_null() && !self.handle_null {
            return Converted::ok(value);
        }
        Converted::ok((self.func)(value, ctx))
    }
}

/// Wraps a plain transform as a converter.
pub fn function<F>(func: F) -> Function<impl Fn(Value, &Context) -> Value + Send + Sync>
where
    F: Fn(Value) -> Value + Send + Sync,
{
    Function::new(move |value, _ctx: &Context| func(value))
}

/// Wraps a context-aware transform as a converter, for functions that
/// produce localized output.
pub fn function_with_context<F>(func: F) -> Function<F>
where
    F: Fn(Value, &Context) -> Value + Send + Sync,
{
    Function::new(func)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_applies_function() {
        let upper = function(|v| match v {
            Value::String(s) => Value::String(s.to_uppercase()),
            other => other,
        });
        assert_eq!(upper.convert_value(json!("abc")).value, json!("ABC"));
    }

    #[test]
    fn test_null_skips_function() {
        let explode = function(|_| unreachable!("must not run on null"));
        assert_eq!(
            explode.convert_value(Value::Null),
            Converted::ok(Value::Null)
        );
    }

    #[test]
    fn test_handle_null_runs_function() {
        let defaulting = function(|v| if v.is_null() { json!(0) } else { v }).handle_null();
        assert_eq!(defaulting.convert_value(Value::Null).value, json!(0));
    }

    #[test]
    fn test_context_aware_function() {
        let localized =
            function_with_context(|_, ctx: &Context| json!(ctx.localize("hello".into())));
        let ctx = Context::builder()
            .with_translator(|m| format!("{m}!"))
            .build();
        assert_eq!(localized.convert(json!("x"), &ctx).value, json!("hello!"));
    }

    #[test]
    #[should_panic(expected = "not a string")]
    fn test_shape_misuse_panics() {
        let strict = function(|v| match v {
            Value::String(s) => Value::String(s),
            other => panic!("not a string: {other}"),
        });
        let _ = strict.convert_value(json!(42));
    }
}
