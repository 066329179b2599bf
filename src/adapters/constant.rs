//! Constant-flavored leaf adapters: Noop, SetValue, Fail, DefaultTo
//!
//! Small building blocks used as pipe stages and combinator branches.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Context, Convert, ConvertError, Converted};

// ============================================================================
// NOOP
// ============================================================================

/// Identity converter for every input, including `Null`.
///
/// Explicitly opts out of the null short-circuit rule; there is nothing to
/// skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Noop;

impl Convert for Noop {
    fn convert(&self, value: Value, _ctx: &Context) -> Converted {
        Converted::ok(value)
    }
}

/// Creates the identity converter.
#[must_use]
pub fn noop() -> Noop {
    Noop
}

// ============================================================================
// SET VALUE
// ============================================================================

/// Replaces the input with a constant, ignoring the input value.
///
/// A `Null` input passes through unchanged unless
/// [`handle_null`](Self::handle_null) is set.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::set_value;
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let zero = set_value(json!(0));
/// assert_eq!(zero.convert_value(json!("anything")).value, json!(0));
/// assert_eq!(zero.convert_value(json!(null)).value, json!(null));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SetValue {
    value: Value,
    handle_null: bool,
}

impl SetValue {
    /// Creates a converter that replaces any non-`Null` input with `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            handle_null: false,
        }
    }

    /// Also replaces `Null` input.
    #[must_use = "builder methods must be chained or built"]
    pub fn handle_null(mut self) -> Self {
        self.handle_null = true;
        self
    }
}

impl Convert for SetValue {
    fn convert(&self, value: Value, _ctx: &Context) -> Converted {
        if value.is_null() && !self.handle_null {
            return Converted::ok(value);
        }
        Converted::ok(self.value.clone())
    }
}

/// Creates a converter that replaces the input with a constant.
#[must_use]
pub fn set_value(value: Value) -> SetValue {
    SetValue::new(value)
}

// ============================================================================
// FAIL
// ============================================================================

/// Always fails, returning the input unchanged with an error message.
///
/// Ignores the input's validity, including `Null`. Used as an
/// always-failing branch in [`Struct`](crate::combinators::Struct)
/// unexpected-key handling and [`Switch`](crate::combinators::Switch)
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fail {
    error: Cow<'static, str>,
}

impl Fail {
    /// Creates an always-failing converter with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            error: Cow::Borrowed("An error occurred"),
        }
    }

    /// Creates an always-failing converter with a custom message.
    pub fn with_error(error: impl Into<Cow<'static, str>>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl Default for Fail {
    fn default() -> Self {
        Self::new()
    }
}

impl Convert for Fail {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let message = ctx.localize(self.error.clone());
        Converted::fail(value, ConvertError::Message(message))
    }
}

/// Creates an always-failing converter with the default message
/// `"An error occurred"`.
#[must_use]
pub fn fail() -> Fail {
    Fail::new()
}

/// Creates an always-failing converter with a custom message.
pub fn fail_with(error: impl Into<Cow<'static, str>>) -> Fail {
    Fail::with_error(error)
}

// ============================================================================
// DEFAULT TO
// ============================================================================

/// Replaces a `Null` input with a fallback; passthrough otherwise. Never
/// errors.
///
/// The fallback is a producer so non-trivial defaults (fresh containers,
/// clock reads) are computed per call; [`default_to`] wraps a constant.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::default_to;
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let answer = default_to(json!(42));
/// assert_eq!(answer.convert_value(json!(null)).value, json!(42));
/// assert_eq!(answer.convert_value(json!("1234")).value, json!("1234"));
/// ```
pub struct DefaultTo {
    fallback: Box<dyn Fn() -> Value + Send + Sync>,
}

impl DefaultTo {
    /// Creates a converter producing its fallback from a closure.
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            fallback: Box::new(fallback),
        }
    }
}

impl Convert for DefaultTo {
    fn convert(&self, value: Value, _ctx: &Context) -> Converted {
        if value.is_null() {
            Converted::ok((self.fallback)())
        } else {
            Converted::ok(value)
        }
    }
}

/// Creates a converter that replaces `Null` with a constant.
#[must_use]
pub fn default_to(fallback: Value) -> DefaultTo {
    DefaultTo::new(move || fallback.clone())
}

/// Creates a converter that replaces `Null` with a produced value.
pub fn default_with<F>(fallback: F) -> DefaultTo
where
    F: Fn() -> Value + Send + Sync + 'static,
{
    DefaultTo::new(fallback)
}

// ============================================================================
// TESTS
// ============================================================================
