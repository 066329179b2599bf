//! Built-in domain converters.
//!
//! Everything here is an ordinary converter assembled from the adapters
//! and combinators; nothing has privileged access to the core. The
//! converters follow the shared conventions: Null passes through
//! untouched, bad data comes back as the best-effort value plus an error,
//! and feeding a converter a shape it does not document is a panic.

pub mod boolean;
pub mod email;
pub mod guards;
pub mod json;
pub mod numeric;
pub mod string;

pub use boolean::{anything_to_bool, guess_bool, str_to_bool};
pub use email::{input_to_email, str_to_email};
pub use guards::{
    require, test_is_array, test_is_boolean, test_is_number, test_is_object, test_is_string,
    test_none,
};
pub use json::{input_to_json, json_to_str, str_to_json};
pub use numeric::{
    anything_to_float, anything_to_int, input_to_float, input_to_int, test_between, test_equals,
    test_greater_or_equal, test_in, test_less_or_equal,
};
pub use string::{cleanup_line, cleanup_text, empty_to_null, input_to_slug, trim};

use serde_json::Value;

use crate::foundation::{Context, Convert, Converted};

/// Leaf converter built from a closure producing a full result pair.
///
/// Follows the null law: Null inputs pass through without invoking the
/// closure.
pub(crate) struct Leaf<F>(pub(crate) F);

impl<F> Convert for Leaf<F>
where
    F: Fn(Value, &Context) -> Converted + Send + Sync,
{
    fn convert(&self, value: Value, ctx: &Context) -> Converted {
        if value.is_null() {
            return Converted::ok(value);
        }
        (self.0)(value, ctx)
    }
}
