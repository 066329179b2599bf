//! Core traits for the conversion system
//!
//! This module defines the converter contract every unit (leaf or
//! combinator) implements, plus the extension trait providing the fluent
//! composition API.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::context::Context;
use crate::foundation::result::Converted;

// ============================================================================
// CORE CONVERTER TRAIT
// ============================================================================

/// The contract every converter implements.
///
/// A converter is an immutable value with a single operation: transform and
/// validate an input, returning both a best-effort value and an optional
/// protocol error. Converters are constructed once, often by composing
/// smaller converters, and are safe to share across concurrent calls.
///
/// Two rules every implementation observes:
///
/// - **Null law**: unless a converter explicitly opts into handling the
///   absence sentinel (`Value::Null`), a `Null` input short-circuits to
///   `(Null, None)` without running any wrapped logic.
/// - **No fatal downgrade**: a converter applied to an input of a shape it
///   was never meant for (a `Struct` fed a number, a string function fed an
///   array) panics. The core never converts such misuse into a protocol
///   error; guard with a shape test earlier in a pipe instead.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::{Context, Convert, Converted};
/// use serde_json::Value;
///
/// struct Negate;
///
/// impl Convert for Negate {
///     fn convert(&self, value: Value, _ctx: &Context) -> Converted {
///         match value {
///             Value::Bool(b) => Converted::ok(Value::Bool(!b)),
///             Value::Null => Converted::ok(Value::Null),
///             other => Converted::fail(other, "Value is not a boolean".into()),
///         }
///     }
/// }
/// ```
pub trait Convert {
    /// Converts `value`, threading `ctx` through unchanged.
    fn convert(&self, value: Value, ctx: &Context) -> Converted;

    /// Converts with a freshly built default context.
    ///
    /// Explicit per-call sugar, not a hidden global: each invocation
    /// constructs its own identity-translation [`Context`].
    fn convert_value(&self, value: Value) -> Converted {
        self.convert(value, &Context::new())
    }
}

/// A heap-allocated, shareable converter.
///
/// Heterogeneous combinators ([`Pipe`], [`Struct`], [`FirstMatch`],
/// [`Switch`]) hold their sub-converters in this form.
///
/// [`Pipe`]: crate::combinators::Pipe
/// [`Struct`]: crate::combinators::Struct
/// [`FirstMatch`]: crate::combinators::FirstMatch
/// [`Switch`]: crate::combinators::Switch
pub type BoxConverter = Box<dyn Convert + Send + Sync>;

impl<C: Convert + ?Sized> Convert for Box<C> {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        (**self).convert(value, ctx)
    }
}

impl<C: Convert + ?Sized> Convert for &C {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        (**self).convert(value, ctx)
    }
}

// ============================================================================
// CONVERTER EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for converters.
///
/// Automatically implemented for every [`Convert`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::prelude::*;
///
/// let age = anything_to_int().then(test_between(0.0, 130.0));
/// let tolerant_age = anything_to_int().catch();
/// ```
pub trait ConvertExt: Convert + Sized {
    /// Boxes the converter for use in heterogeneous combinators.
    fn boxed(self) -> BoxConverter
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Sequences `self` before `next`, fail-fast.
    ///
    /// Equivalent to `pipe![self, next]`.
    fn then<C>(self, next: C) -> crate::combinators::Pipe
    where
        Self: Send + Sync + 'static,
        C: Convert + Send + Sync + 'static,
    {
        crate::combinators::Pipe::from_stages(vec![self.boxed(), next.boxed()])
    }

    /// Replaces any error produced by `self` with one atomic message.
    fn with_error(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> crate::combinators::WithError<Self> {
        crate::combinators::WithError::new(self, message)
    }

    /// Swallows errors, replacing the failed value with `Null`.
    fn catch(self) -> crate::adapters::Catch<Self> {
        crate::adapters::Catch::new(self)
    }

    /// Swallows errors, computing a replacement value from the failed pair.
    fn catch_with<F>(self, recover: F) -> crate::adapters::Catch<Self>
    where
        F: Fn(Value, crate::foundation::ConvertError) -> Value + Send + Sync + 'static,
    {
        crate::adapters::Catch::with_recover(self, recover)
    }
}

impl<C: Convert> ConvertExt for C {}

// ============================================================================
// TESTS
// ============================================================================
