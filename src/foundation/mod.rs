//! Core conversion types and traits
//!
//! This module contains the fundamental building blocks of the conversion
//! system:
//!
//! - **Traits**: `Convert`, `ConvertExt`
//! - **Result pair**: `Converted`
//! - **Errors**: `ConvertError`, `CheckError`
//! - **Context**: `Context`, `ContextBuilder`
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Every unit, leaf adapter or combinator alike, implements [`Convert`] with a
//! single `convert` operation, so composition is uniform: a `Struct` field
//! can be a leaf, a pipe, or another `Struct`.
//!
//! ## 2. Errors are data
//!
//! Invalid input never raises: the error travels in the second slot of the
//! [`Converted`] pair, as an atomic message or a recursive tree mirroring
//! the input's shape. Only programmer misuse (wrong value shape for a
//! converter that cannot express it) panics.
//!
//! ## 3. Context is threaded, never mutated
//!
//! A [`Context`] built once is passed by reference through the whole call
//! tree and carries the translation function for error messages.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tamis::prelude::*;
//! use serde_json::json;
//!
//! let converter = pipe![cleanup_line(), require()];
//! let result = converter.convert_value(json!("  hello  "));
//! assert_eq!(result.value, json!("hello"));
//! ```

// Module declarations
pub mod context;
pub mod error;
pub mod result;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use context::{Context, ContextBuilder, Translator};
pub use error::{CheckError, ConvertError};
pub use result::Converted;
pub use traits::{BoxConverter, Convert, ConvertExt};

use serde_json::Value;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs a converter and extracts the bare success value, or fails with a
/// [`CheckError`] carrying both halves of the pair.
///
/// Boundary adapter from the fallible-pair world to conventional fail-fast
/// `Result` handling.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::{check, Context};
/// use tamis::converters::anything_to_int;
/// use serde_json::json;
///
/// let ctx = Context::new();
/// assert_eq!(check(&anything_to_int(), json!("42"), &ctx).unwrap(), json!(42));
/// assert!(check(&anything_to_int(), json!("42,75"), &ctx).is_err());
/// ```
pub fn check<C>(converter: &C, value: Value, ctx: &Context) -> Result<Value, CheckError>
where
    C: Convert + ?Sized,
{
    converter.convert(value, ctx).check()
}

/// Python-like truthiness over JSON values: `Null`, `false`, `0`, `""`,
/// `[]` and `{}` are falsy, everything else is truthy.
///
/// Used by [`Condition`](crate::combinators::Condition) to interpret the
/// test converter's output, and by value-normalizing leaves.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
