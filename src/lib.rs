//! # tamis
//!
//! A composable data conversion and validation toolbox.
//!
//! Converters take a [`serde_json::Value`] plus a [`Context`](foundation::Context)
//! and always return both a best-effort value and an optional error, so a
//! partially invalid form still yields everything that could be salvaged
//! alongside an error tree mirroring the input's shape.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tamis::prelude::*;
//! use serde_json::json;
//!
//! let signup = structure![
//!     "username" => pipe![cleanup_line(), require()],
//!     "email" => input_to_email(),
//!     "age" => pipe![input_to_int(), test_between(0.0, 130.0)],
//! ];
//!
//! let result = signup.convert_value(json!({
//!     "username": "  Ada  ",
//!     "email": "mailto:Ada@Lovelace.name",
//!     "age": " 36 ",
//! }));
//! assert_eq!(result.value, json!({
//!     "username": "Ada",
//!     "email": "ada@lovelace.name",
//!     "age": 36,
//! }));
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Convert`](foundation::Convert) contract, the
//!   `(value, error)` result pair and the recursive error tree.
//! - [`adapters`]: wrap plain closures and constants into converters.
//! - [`combinators`]: compose converters: pipes, struct schemas, uniform
//!   collections, conditions, alternatives, switches.
//! - [`converters`]: built-in domain converters for strings, booleans,
//!   numbers, emails and JSON text.

pub mod adapters;
pub mod combinators;
pub mod converters;
pub mod foundation;
mod macros;
pub mod prelude;
