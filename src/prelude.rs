//! Prelude module for convenient imports.
//!
//! Provides a single `use tamis::prelude::*;` import that brings in the
//! converter contract, the adapters, the combinators and the built-in
//! domain converters.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tamis::prelude::*;
//!
//! let tags = uniform_set(pipe![cleanup_line(), input_to_slug(), require()]);
//! let age = pipe![input_to_int(), test_between(0.0, 130.0)];
//! ```

// ============================================================================
// FOUNDATION: Contract, result pair, error tree, context
// ============================================================================

pub use crate::foundation::{
    check, is_truthy, BoxConverter, CheckError, Context, ContextBuilder, Convert, ConvertError,
    ConvertExt, Converted, Translator,
};

// ============================================================================
// ADAPTERS: Closures and constants as converters
// ============================================================================

pub use crate::adapters::{
    catch_error, catch_error_with, default_to, default_with, fail, fail_with, function,
    function_with_context, noop, set_value, test, test_with_context, translate, Catch, DefaultTo,
    Fail, Function, Noop, SetValue, Test, Translate,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    condition, first_match, pipe, structure, switch, uniform_mapping, uniform_sequence,
    uniform_set, when, with_error, Condition, FirstMatch, Pipe, SequenceKind, Struct, Switch,
    UnexpectedKey, UniformMapping, UniformSequence, WithError,
};

// ============================================================================
// CONVERTERS: Built-in domain converters
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::converters::*;
