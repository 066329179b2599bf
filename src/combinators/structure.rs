//! STRUCT combinator - heterogeneous mapping conversion
//!
//! Applies a per-key schema to an object. Each schema entry runs
//! independently on its key's value (or Null when the key is absent), so
//! one failing field never hides the others. Keys present in the input but
//! not in the schema are handled by an [`UnexpectedKey`] policy.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::foundation::{BoxConverter, Context, Convert, ConvertError, Converted};

// ============================================================================
// UNEXPECTED KEY POLICY
// ============================================================================

/// What to do with input keys the schema does not mention.
pub enum UnexpectedKey {
    /// Remove the key from the output silently.
    Drop,
    /// Keep the key and its value untouched.
    PassThrough,
    /// Keep the value and report an error under the key.
    Reject,
    /// Run a converter on the value; its result pair lands under the key.
    Convert(BoxConverter),
}

impl Default for UnexpectedKey {
    fn default() -> Self {
        Self::Reject
    }
}

impl std::fmt::Debug for UnexpectedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => f.write_str("Drop"),
            Self::PassThrough => f.write_str("PassThrough"),
            Self::Reject => f.write_str("Reject"),
            Self::Convert(_) => f.write_str("Convert(..)"),
        }
    }
}

// ============================================================================
// STRUCT COMBINATOR
// ============================================================================

/// Per-key conversion of a heterogeneous object.
///
/// Schema entries run in declaration order; absent keys are converted from
/// Null, which lets a field converter chain end in `require()` to make the
/// field mandatory. Errors are collected into a
/// [`ConvertError::Mapping`] keyed by field name.
///
/// # Panics
///
/// Panics when the input is neither Null nor an object. Feeding a scalar
/// to a struct schema is a programming error, not a data error.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::prelude::*;
/// use serde_json::json;
///
/// let signup = structure![
///     "name" => pipe![cleanup_line(), require()],
///     "email" => input_to_email(),
/// ];
/// let result = signup.convert_value(json!({"name": " Ada ", "email": "ada@example.com"}));
/// assert_eq!(result.value, json!({"name": "Ada", "email": "ada@example.com"}));
/// ```
pub struct Struct {
    schema: Vec<(String, BoxConverter)>,
    unexpected: UnexpectedKey,
    drop_null_values: bool,
}

impl Struct {
    /// Creates a struct converter from a schema.
    ///
    /// Unexpected keys are rejected by default.
    #[must_use]
    pub fn new(schema: Vec<(String, BoxConverter)>) -> Self {
        Self {
            schema,
            unexpected: UnexpectedKey::default(),
            drop_null_values: false,
        }
    }

    /// Sets the policy for keys absent from the schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn unexpected(mut self, policy: UnexpectedKey) -> Self {
        self.unexpected = policy;
        self
    }

    /// Omits keys whose converted value is Null from the output.
    ///
    /// Errors reported for such keys are kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn drop_null_values(mut self) -> Self {
        self.drop_null_values = true;
        self
    }

    fn convert_object(&self, mut input: Map<String, Value>, ctx: &Context) -> Converted {
        let mut output = Map::with_capacity(input.len().max(self.schema.len()));
        let mut errors: Vec<(String, ConvertError)> = Vec::new();

        for (key, converter) in &self.schema {
            let field = input.shift_remove(key).unwrap_or(Value::Null);
            let result = converter.convert(field, ctx);
            if let Some(error) = result.error {
                errors.push((key.clone(), error));
            }
            if !(self.drop_null_values && result.value.is_null()) {
                output.insert(key.clone(), result.value);
            }
        }

        for (key, field) in input {
            match &self.unexpected {
                UnexpectedKey::Drop => {}
                UnexpectedKey::PassThrough => {
                    output.insert(key, field);
                }
                UnexpectedKey::Reject => {
                    output.insert(key.clone(), field);
                    errors.push((
                        key,
                        ConvertError::Message(ctx.localize(Cow::Borrowed("Unexpected item"))),
                    ));
                }
                UnexpectedKey::Convert(converter) => {
                    let result = converter.convert(field, ctx);
                    if let Some(error) = result.error {
                        errors.push((key.clone(), error));
                    }
                    if !(self.drop_null_values && result.value.is_null()) {
                        output.insert(key, result.value);
                    }
                }
            }
        }

        if errors.is_empty() {
            Converted::ok(Value::Object(output))
        } else {
            Converted::fail(Value::Object(output), ConvertError::Mapping(errors))
        }
    }
}

impl Convert for Struct {
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        match value {
            Value::Null => Converted::ok(Value::Null),
            Value::Object(map) => self.convert_object(map, ctx),
            other => panic!("struct converter expects an object, got: {other}"),
        }
    }
}

/// Creates a struct converter from a schema. See also the
/// [`structure!`](crate::structure) macro.
#[must_use]
pub fn structure(schema: Vec<(String, BoxConverter)>) -> Struct {
    Struct::new(schema)
}

// ============================================================================
// TESTS
// ============================================================================
