//! CATCH adapter - swallows protocol errors from an inner converter
//!
//! Only channel-(a) errors are caught: the error slot of the result pair.
//! Panics from shape misuse propagate untouched.

use serde_json::Value;

use crate::foundation::{Context, Convert, ConvertError, Converted};

type Recover = dyn Fn(Value, ConvertError) -> Value + Send + Sync;

// ============================================================================
// CATCH ADAPTER
// ============================================================================

/// Runs an inner converter and replaces any error with `None`, optionally
/// computing a replacement value from the failed pair.
///
/// Without a recover function, a failed conversion yields `(Null, None)`.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::{catch_error, fail};
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let tolerant = catch_error(fail());
/// assert_eq!(tolerant.convert_value(json!(42)).into_pair(), (json!(null), None));
/// ```
pub struct Catch<C> {
    inner: C,
    recover: Option<Box<Recover>>,
}

impl<C> Catch<C> {
    /// Creates a catching converter that yields `Null` on inner failure.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            recover: None,
        }
    }

    /// Creates a catching converter that computes a replacement value from
    /// the failed `(value, error)` pair.
    pub fn with_recover<F>(inner: C, recover: F) -> Self
    where
        F: Fn(Value, ConvertError) -> Value + Send + Sync + 'static,
    {
        Self {
            inner,
            recover: Some(Box::new(recover)),
        }
    }
}

impl<C: Convert> Convert for Catch<C> {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let result = self.inner.convert(value, ctx);
        match result.error {
            None => result,
            Some(error) => {
                let replacement = match &self.recover {
                    Some(recover) => recover(result.value, error),
                    None => Value::Null,
                };
                Converted::ok(replacement)
            }
        }
    }
}

/// Creates a converter that swallows errors, yielding `Null` on failure.
pub fn catch_error<C: Convert>(inner: C) -> Catch<C> {
    Catch::new(inner)
}

/// Creates a converter that swallows errors, recovering a value from the
/// failed pair.
pub fn catch_error_with<C, F>(inner: C, recover: F) -> Catch<C>
where
    C: Convert,
    F: Fn(Value, ConvertError) -> Value + Send + Sync + 'static,
{
    Catch::with_recover(inner, recover)
}

// ============================================================================
// TESTS
// ============================================================================
