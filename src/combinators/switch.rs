//! SWITCH combinator - dispatch on a computed key
//!
//! Computes a key from the input with a selector converter and routes the
//! original input to the branch registered for that key. Unlike
//! [`FirstMatch`](super::FirstMatch), the selector decides up front; no
//! branch is ever run speculatively.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{BoxConverter, Context, Convert, ConvertError, ConvertExt, Converted};

// ============================================================================
// SWITCH COMBINATOR
// ============================================================================

/// Dispatches the input on the key produced by a selector converter.
///
/// A failing selector short-circuits with the original input value and the
/// selector's error. A key without a branch falls back to the default
/// branch, or fails naming the unmatched key.
pub struct Switch<S> {
    selector: S,
    branches: Vec<(Value, BoxConverter)>,
    default_branch: Option<BoxConverter>,
    handle_null: bool,
}

impl<S> Switch<S>
where
    S: Convert,
{
    /// Creates a switch with no branches.
    #[must_use]
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            branches: Vec::new(),
            default_branch: None,
            handle_null: false,
        }
    }

    /// Registers a branch for a key. Keys are compared by value equality.
    #[must_use = "builder methods must be chained or built"]
    pub fn case<K, C>(mut self, key: K, branch: C) -> Self
    where
        K: Into<Value>,
        C: Convert + Send + Sync + 'static,
    {
        self.branches.push((key.into(), branch.boxed()));
        self
    }

    /// Registers the branch taken when no key matches.
    #[must_use = "builder methods must be chained or built"]
    pub fn default<C>(mut self, branch: C) -> Self
    where
        C: Convert + Send + Sync + 'static,
    {
        self.default_branch = Some(branch.boxed());
        self
    }

    /// Runs the selector on Null inputs too instead of passing them through.
    #[must_use = "builder methods must be chained or built"]
    pub fn handle_null(mut self) -> Self {
        self.handle_null = true;
        self
    }
}

fn key_repr(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<S> Convert for Switch<S>
where
    S: Convert,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        if value.is_null() && !self.handle_null {
            return Converted::ok(value);
        }
        let probe = self.selector.convert(value.clone(), ctx);
        if let Some(error) = probe.error {
            return Converted::fail(value, error);
        }
        for (key, branch) in &self.branches {
            if *key == probe.value {
                return branch.convert(value, ctx);
            }
        }
        match &self.default_branch {
            Some(branch) => branch.convert(value, ctx),
            None => {
                // Translators see the template, not the interpolated text.
                let template =
                    ctx.localize(Cow::Borrowed("Expression \"{0}\" doesn't match any key"));
                let message = template.replace("{0}", &key_repr(&probe.value));
                Converted::fail(value, ConvertError::Message(Cow::Owned(message)))
            }
        }
    }
}

/// Creates a switch with no branches; add them with
/// [`case`](Switch::case) and [`default`](Switch::default).
#[must_use]
pub fn switch<S>(selector: S) -> Switch<S>
where
    S: Convert,
{
    Switch::new(selector)
}

// ============================================================================
// TESTS
// ============================================================================
