//! Combinators that compose converters into larger ones.
//!
//! Each combinator implements [`Convert`](crate::foundation::Convert) and
//! takes converters as parts: [`Pipe`] chains them, [`Struct`],
//! [`UniformMapping`] and [`UniformSequence`] walk collections with them,
//! [`Condition`], [`FirstMatch`] and [`Switch`] choose between them, and
//! [`WithError`] rewrites their failures.

pub mod condition;
pub mod first_match;
pub mod message;
pub mod pipe;
pub mod structure;
pub mod switch;
pub mod uniform_mapping;
pub mod uniform_sequence;

pub use condition::{condition, when, Condition};
pub use first_match::{first_match, FirstMatch};
pub use message::{with_error, WithError};
pub use pipe::{pipe, Pipe};
pub use structure::{structure, Struct, UnexpectedKey};
pub use switch::{switch, Switch};
pub use uniform_mapping::{uniform_mapping, UniformMapping};
pub use uniform_sequence::{uniform_sequence, uniform_set, SequenceKind, UniformSequence};
