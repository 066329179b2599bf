//! Leaf adapters
//!
//! Adapters wrap plain functions and constants into the
//! [`Convert`](crate::foundation::Convert) contract, so ordinary predicates
//! and transforms compose with the combinators.
//!
//! - [`function`]: total transform, never errors
//! - [`test`]: predicate, errors without modifying the value
//! - [`noop`] / [`set_value`] / [`fail`] / [`default_to`]: constants
//! - [`translate`]: lookup table
//! - [`catch_error`]: swallow an inner converter's errors
//!
//! # Examples
//!
//! ```rust,ignore
//! use tamis::prelude::*;
//! use serde_json::json;
//!
//! let converter = pipe![
//!     test(Value::is_string).with_error("Value is not a string"),
//!     function(|v| json!(v.as_str().unwrap_or_default().len())),
//! ];
//! ```

pub mod catch;
pub mod constant;
pub mod function;
pub mod test;
pub mod translate;

pub use catch::{Catch, catch_error, catch_error_with};
pub use constant::{
    DefaultTo, Fail, Noop, SetValue, default_to, default_with, fail, fail_with, noop, set_value,
};
pub use function::{Function, function, function_with_context};
pub use test::{Test, test, test_with_context};
pub use translate::{Translate, translate};
