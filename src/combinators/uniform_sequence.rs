//! UNIFORM SEQUENCE combinator - homogeneous array conversion
//!
//! Applies one converter to every item of an array. The list flavor keeps
//! items in place; the set flavor additionally drops duplicates, keeping
//! the first occurrence. Item errors are reported sparsely by index.

use serde_json::Value;

use crate::foundation::{Context, Convert, ConvertError, Converted};

// ============================================================================
// SEQUENCE KIND
// ============================================================================

/// Output discipline of a [`UniformSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceKind {
    /// Keep every converted item in order.
    #[default]
    List,
    /// Keep converted items in order, dropping duplicates after the first.
    Set,
}

// ============================================================================
// UNIFORM SEQUENCE COMBINATOR
// ============================================================================

/// Converts every item of an array with a shared converter.
///
/// Errors are collected into a sparse [`ConvertError::Sequence`]; indices
/// refer to positions in the input array, before any item dropping, so a
/// caller can always point back at the offending input element.
///
/// # Panics
///
/// Panics when the input is neither Null nor an array.
pub struct UniformSequence<C> {
    item_converter: C,
    kind: SequenceKind,
    drop_null_items: bool,
}

impl<C> UniformSequence<C>
where
    C: Convert,
{
    /// Creates a list converter.
    #[must_use]
    pub fn new(item_converter: C) -> Self {
        Self {
            item_converter,
            kind: SequenceKind::List,
            drop_null_items: false,
        }
    }

    /// Selects the output discipline.
    #[must_use = "builder methods must be chained or built"]
    pub fn kind(mut self, kind: SequenceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Omits items whose converted value is Null from the output.
    #[must_use = "builder methods must be chained or built"]
    pub fn drop_null_items(mut self) -> Self {
        self.drop_null_items = true;
        self
    }

    fn convert_array(&self, input: Vec<Value>, ctx: &Context) -> Converted {
        let mut output = Vec::with_capacity(input.len());
        let mut errors: Vec<(usize, ConvertError)> = Vec::new();

        for (index, item) in input.into_iter().enumerate() {
            let result = self.item_converter.convert(item, ctx);
            if let Some(error) = result.error {
                errors.push((index, error));
            }
            if self.drop_null_items && result.value.is_null() {
                continue;
            }
            if self.kind == SequenceKind::Set && output.contains(&result.value) {
                continue;
            }
            output.push(result.value);
        }

        if errors.is_empty() {
            Converted::ok(Value::Array(output))
        } else {
            Converted::fail(Value::Array(output), ConvertError::Sequence(errors))
        }
    }
}

impl<C> Convert for UniformSequence<C>
where
    C: Convert,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        match value {
            Value::Null => Converted::ok(Value::Null),
            Value::Array(items) => self.convert_array(items, ctx),
            other => panic!("uniform sequence expects an array, got: {other}"),
        }
    }
}

/// Creates a list converter that applies `item_converter` to every item.
#[must_use]
pub fn uniform_sequence<C>(item_converter: C) -> UniformSequence<C>
where
    C: Convert,
{
    UniformSequence::new(item_converter)
}

/// Creates a set converter: converted items are deduplicated, first
/// occurrence wins.
#[must_use]
pub fn uniform_set<C>(item_converter: C) -> UniformSequence<C>
where
    C: Convert,
{
    UniformSequence::new(item_converter).kind(SequenceKind::Set)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{function, set_value};
    use crate::converters::require;
    use serde_json::json;

    fn double() -> impl Convert {
        function(|v| json!(v.as_i64().map_or(0, |n| n * 2)))
    }

    #[test]
    fn test_null_passes_through() {
        let converter = uniform_sequence(double());
        assert_eq!(converter.convert_value(Value::Null), Converted::ok(Value::Null));
    }

    #[test]
    fn test_converts_every_item() {
        let converter = uniform_sequence(double());
        let result = converter.convert_value(json!([1, 2, 3]));
        assert_eq!(result, Converted::ok(json!([2, 4, 6])));
    }

    #[test]
    fn test_errors_are_sparse_by_input_index() {
        let converter = uniform_sequence(require());
        let result = converter.convert_value(json!([1, null, 3, null]));
        assert_eq!(result.value, json!([1, null, 3, null]));
        let error = result.error.unwrap();
        assert!(error.at_index(0).is_none());
        assert_eq!(error.at_index(1).and_then(ConvertError::as_message), Some("Missing value"));
        assert!(error.at_index(2).is_none());
        assert!(error.at_index(3).is_some());
    }

    #[test]
    fn test_set_drops_duplicates_keeping_first() {
        let converter = uniform_set(double());
        let result = converter.convert_value(json!([1, 2, 1, 3, 2]));
        assert_eq!(result, Converted::ok(json!([2, 4, 6])));
    }

    #[test]
    fn test_drop_null_items_keeps_input_indices_in_errors() {
        let converter = uniform_sequence(require()).drop_null_items();
        let result = converter.convert_value(json!([null, "x"]));
        assert_eq!(result.value, json!(["x"]));
        let error = result.error.unwrap();
        assert!(error.at_index(0).is_some());
    }

    #[test]
    fn test_drop_null_items() {
        let converter = uniform_sequence(set_value(Value::Null).handle_null()).drop_null_items();
        let result = converter.convert_value(json!([1, 2]));
        assert_eq!(result.value, json!([]));
    }

    #[test]
    #[should_panic(expected = "expects an array")]
    fn test_object_input_panics() {
        let converter = uniform_sequence(double());
        let _ = converter.convert_value(json!({"a": 1}));
    }
}
