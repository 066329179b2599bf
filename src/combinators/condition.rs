//! CONDITION combinator - branch on a test converter
//!
//! Probes the input with a test converter, then routes the original input
//! to one of two branches. A failing probe is itself the outcome: its
//! result pair is returned unchanged, so a broken test never silently
//! falls through to the "false" branch.

use serde_json::Value;

use crate::adapters::Noop;
use crate::foundation::{is_truthy, Context, Convert, Converted};

// ============================================================================
// CONDITION COMBINATOR
// ============================================================================

/// Routes the input through `if_true` or `if_false` depending on the
/// truthiness of the test converter's output.
///
/// The test runs on a clone of the input; whichever branch is chosen
/// receives the original, untouched value. When no `if_false` branch is
/// given, the falsy case is the identity.
pub struct Condition<T, A, B> {
    test: T,
    if_true: A,
    if_false: Option<B>,
}

impl<T, A, B> Condition<T, A, B>
where
    T: Convert,
    A: Convert,
    B: Convert,
{
    /// Creates a two-branch condition.
    #[must_use]
    pub fn new(test: T, if_true: A, if_false: B) -> Self {
        Self {
            test,
            if_true,
            if_false: Some(if_false),
        }
    }
}

impl<T, A> Condition<T, A, Noop>
where
    T: Convert,
    A: Convert,
{
    /// Creates a condition whose falsy branch is the identity.
    #[must_use]
    pub fn when(test: T, if_true: A) -> Self {
        Self {
            test,
            if_true,
            if_false: None,
        }
    }
}

impl<T, A, B> Convert for Condition<T, A, B>
where
    T: Convert,
    A: Convert,
    B: Convert,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let probe = self.test.convert(value.clone(), ctx);
        if probe.is_err() {
            return probe;
        }
        if is_truthy(&probe.value) {
            self.if_true.convert(value, ctx)
        } else {
            match &self.if_false {
                Some(branch) => branch.convert(value, ctx),
                None => Converted::ok(value),
            }
        }
    }
}

/// Creates a two-branch condition.
#[must_use]
pub fn condition<T, A, B>(test: T, if_true: A, if_false: B) -> Condition<T, A, B>
where
    T: Convert,
    A: Convert,
    B: Convert,
{
    Condition::new(test, if_true, if_false)
}

/// Creates a condition whose falsy branch is the identity.
#[must_use]
pub fn when<T, A>(test: T, if_true: A) -> Condition<T, A, Noop>
where
    T: Convert,
    A: Convert,
{
    Condition::when(test, if_true)
}

// ============================================================================
// TESTS
// ============================================================================
