//! WITH ERROR combinator - replace an error message
//!
//! Wraps a converter and swaps any failure's error for a single fixed
//! message. The best-effort value is kept; only the error channel changes.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Context, Convert, ConvertError, Converted};

// ============================================================================
// WITH ERROR COMBINATOR
// ============================================================================

/// Replaces the inner converter's error, whatever its shape, with an
/// atomic message. Successful results pass through untouched.
pub struct WithError<C> {
    inner: C,
    message: Cow<'static, str>,
}

impl<C> WithError<C>
where
    C: Convert,
{
    /// Wraps `inner`, reporting `message` on any failure.
    #[must_use]
    pub fn new(inner: C, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<C> Convert for WithError<C>
where
    C: Convert,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let result = self.inner.convert(value, ctx);
        if result.is_err() {
            let message = ctx.localize(self.message.clone());
            Converted::fail(result.value, ConvertError::Message(message))
        } else {
            result
        }
    }
}

/// Wraps a converter, reporting `message` on any failure.
#[must_use]
pub fn with_error<C>(inner: C, message: impl Into<Cow<'static, str>>) -> WithError<C>
where
    C: Convert,
{
    WithError::new(inner, message)
}

// ============================================================================
// TESTS
// ============================================================================
