//! PIPE combinator - sequential fail-fast composition
//!
//! Runs converters left to right, feeding each stage's output value into
//! the next. The first failing stage ends the run: its exact result pair is
//! returned and later stages are never invoked, so they can assume the
//! narrower, already-validated shape produced by their predecessors.

use serde_json::Value;

use crate::foundation::{BoxConverter, Context, Convert, ConvertExt, Converted};

// ============================================================================
// PIPE COMBINATOR
// ============================================================================

/// Sequential fail-fast composition of converters.
///
/// The empty pipe is the identity converter. A pipe performs no null
/// short-circuit of its own: its stages decide individually.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::prelude::*;
/// use serde_json::json;
///
/// let username = pipe![cleanup_line(), require()];
/// assert_eq!(username.convert_value(json!("  John Doe")).value, json!("John Doe"));
///
/// // "   " trims to Null, then require() reports it missing:
/// let result = username.convert_value(json!("   "));
/// assert_eq!(result.value, json!(null));
/// assert!(result.is_err());
/// ```
#[derive(Default)]
pub struct Pipe {
    stages: Vec<BoxConverter>,
}

impl Pipe {
    /// Creates an empty pipe (the identity converter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipe from boxed stages.
    #[must_use]
    pub fn from_stages(stages: Vec<BoxConverter>) -> Self {
        Self { stages }
    }

    /// Appends a stage.
    #[must_use = "builder methods must be chained or built"]
    pub fn then<C>(mut self, stage: C) -> Self
    where
        C: Convert + Send + Sync + 'static,
    {
        self.stages.push(stage.boxed());
        self
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipe has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Convert for Pipe {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let mut value = value;
        for stage in &self.stages {
            let result = stage.convert(value, ctx);
            if result.is_err() {
                return result;
            }
            value = result.value;
        }
        Converted::ok(value)
    }
}

/// Creates a pipe from boxed stages. See also the [`pipe!`](crate::pipe)
/// macro, which boxes its arguments.
#[must_use]
pub fn pipe(stages: Vec<BoxConverter>) -> Pipe {
    Pipe::from_stages(stages)
}

// ============================================================================
// TESTS
// ============================================================================
