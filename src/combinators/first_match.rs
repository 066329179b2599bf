//! FIRST MATCH combinator - ordered alternatives
//!
//! Tries converters in order on the same input until one succeeds. When
//! every alternative fails, the last failure is the outcome; the last
//! alternative is therefore the natural place for the most permissive or
//! most descriptive converter.

use serde_json::Value;

use crate::foundation::{BoxConverter, Context, Convert, ConvertExt, Converted};

// ============================================================================
// FIRST MATCH COMBINATOR
// ============================================================================

/// Tries each alternative on the original input, returning the first
/// success or the last failure.
///
/// With no alternatives, any input succeeds unchanged.
#[derive(Default)]
pub struct FirstMatch {
    alternatives: Vec<BoxConverter>,
}

impl FirstMatch {
    /// Creates an empty first-match (the identity converter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a first-match from boxed alternatives.
    #[must_use]
    pub fn from_alternatives(alternatives: Vec<BoxConverter>) -> Self {
        Self { alternatives }
    }

    /// Appends an alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<C>(mut self, alternative: C) -> Self
    where
        C: Convert + Send + Sync + 'static,
    {
        self.alternatives.push(alternative.boxed());
        self
    }
}

impl Convert for FirstMatch {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        let Some((final_alternative, rest)) = self.alternatives.split_last() else {
            return Converted::ok(value);
        };
        for alternative in rest {
            let result = alternative.convert(value.clone(), ctx);
            if result.is_ok() {
                return result;
            }
        }
        final_alternative.convert(value, ctx)
    }
}

/// Creates a first-match from boxed alternatives. See also the
/// [`first_match!`](crate::first_match) macro.
#[must_use]
pub fn first_match(alternatives: Vec<BoxConverter>) -> FirstMatch {
    FirstMatch::from_alternatives(alternatives)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{fail_with, function, set_value, test};
    use serde_json::json;

    #[test]
    fn test_empty_first_match_is_identity() {
        assert_eq!(
            FirstMatch::new().convert_value(json!(7)),
            Converted::ok(json!(7))
        );
    }

    #[test]
    fn test_first_success_wins() {
        let converter = crate::first_match![
            test(|v: &Value| v.is_string()),
            set_value(json!("fallback")),
        ];
        assert_eq!(converter.convert_value(json!("hi")).value, json!("hi"));
    }

    #[test]
    fn test_failures_fall_through() {
        let converter = crate::first_match![
            test(|v: &Value| v.is_string()),
            function(|v| json!(v.as_i64().map_or(0, |n| n + 1))),
        ];
        assert_eq!(converter.convert_value(json!(1)), Converted::ok(json!(2)));
    }

    #[test]
    fn test_last_failure_wins() {
        let converter = crate::first_match![fail_with("first"), fail_with("second")];
        let result = converter.convert_value(json!(0));
        assert_eq!(result.value, json!(0));
        assert_eq!(result.error.unwrap().as_message(), Some("second"));
    }

    #[test]
    fn test_alternatives_see_original_input() {
        let converter = crate::first_match![
            crate::pipe![
                function(|v| json!(v.as_i64().map_or(0, |n| n * 10))),
                test(|_: &Value| false),
            ],
            function(|v| json!(v.as_i64().map_or(0, |n| n + 1))),
        ];
        // The first alternative multiplied before failing, yet the second
        // alternative still starts from 3.
        assert_eq!(converter.convert_value(json!(3)).value, json!(4));
    }
}
