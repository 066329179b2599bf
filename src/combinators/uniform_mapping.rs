//! UNIFORM MAPPING combinator - homogeneous object conversion
//!
//! Applies one converter to every value of an object, and optionally a
//! second converter to every key. Dictionaries of uniform shape (say,
//! string identifiers mapping to counts) are validated with two converters
//! instead of a schema entry per key.

use serde_json::{Map, Value};

use crate::foundation::{BoxConverter, Context, Convert, ConvertError, ConvertExt, Converted};

// ============================================================================
// UNIFORM MAPPING COMBINATOR
// ============================================================================

/// Converts every entry of an object with shared key and value converters.
///
/// Errors are collected into a [`ConvertError::Mapping`] under the
/// converted key. When both the key and the value conversion of one entry
/// fail, the value error wins.
///
/// # Panics
///
/// Panics when the input is neither Null nor an object, and when a key
/// converter produces something other than a string (or Null while
/// [`drop_null_keys`](Self::drop_null_keys) is unset). Keys index the
/// output object, so a non-string key is a shape error in the converter
/// itself.
pub struct UniformMapping<V> {
    value_converter: V,
    key_converter: Option<BoxConverter>,
    drop_null_keys: bool,
    drop_null_values: bool,
}

impl<V> UniformMapping<V>
where
    V: Convert,
{
    /// Creates a uniform mapping that converts values only.
    #[must_use]
    pub fn new(value_converter: V) -> Self {
        Self {
            value_converter,
            key_converter: None,
            drop_null_keys: false,
            drop_null_values: false,
        }
    }

    /// Also converts every key. The converted key must come out a string.
    #[must_use = "builder methods must be chained or built"]
    pub fn keys<K>(mut self, key_converter: K) -> Self
    where
        K: Convert + Send + Sync + 'static,
    {
        self.key_converter = Some(key_converter.boxed());
        self
    }

    /// Skips entries whose converted key is Null instead of panicking.
    /// An error attached to the dropped key is still recorded, under the
    /// original key.
    #[must_use = "builder methods must be chained or built"]
    pub fn drop_null_keys(mut self) -> Self {
        self.drop_null_keys = true;
        self
    }

    /// Omits entries whose converted value is Null from the output.
    #[must_use = "builder methods must be chained or built"]
    pub fn drop_null_values(mut self) -> Self {
        self.drop_null_values = true;
        self
    }

    fn convert_object(&self, input: Map<String, Value>, ctx: &Context) -> Converted {
        let mut output = Map::with_capacity(input.len());
        let mut errors: Vec<(String, ConvertError)> = Vec::new();

        for (key, item) in input {
            let (key, key_error) = match &self.key_converter {
                None => (key, None),
                Some(converter) => {
                    let result = converter.convert(Value::String(key.clone()), ctx);
                    match result.value {
                        Value::String(converted) => (converted, result.error),
                        Value::Null if self.drop_null_keys => {
                            // The entry is dropped, its key error is not.
                            if let Some(error) = result.error {
                                errors.push((key, error));
                            }
                            continue;
                        }
                        other => panic!("mapping key converter must yield a string, got: {other}"),
                    }
                }
            };

            let result = self.value_converter.convert(item, ctx);
            if let Some(error) = result.error.or(key_error) {
                errors.push((key.clone(), error));
            }
            if !(self.drop_null_values && result.value.is_null()) {
                output.insert(key, result.value);
            }
        }

        if errors.is_empty() {
            Converted::ok(Value::Object(output))
        } else {
            Converted::fail(Value::Object(output), ConvertError::Mapping(errors))
        }
    }
}

impl<V> Convert for UniformMapping<V>
where
    V: Convert,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        match value {
            Value::Null => Converted::ok(Value::Null),
            Value::Object(map) => self.convert_object(map, ctx),
            other => panic!("uniform mapping expects an object, got: {other}"),
        }
    }
}

/// Creates a uniform mapping that converts values only.
#[must_use]
pub fn uniform_mapping<V>(value_converter: V) -> UniformMapping<V>
where
    V: Convert,
{
    UniformMapping::new(value_converter)
}

// ============================================================================
// TESTS
// ============================================================================
