//! TRANSLATE adapter - value-to-value lookup table
//!
//! Converts values found in a table and keeps the others as is.

use serde_json::Value;

use crate::foundation::{Context, Convert, Converted};

// ============================================================================
// TRANSLATE ADAPTER
// ============================================================================

/// Looks the input up in a table of `(from, to)` pairs; passes values
/// absent from the table through unchanged.
///
/// Unlike most leaves, `Null` is handled: a `Null` entry in the table
/// translates `Null` input.
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::adapters::translate;
/// use tamis::foundation::Convert;
/// use serde_json::json;
///
/// let grades = translate(vec![(json!(0), json!("bad")), (json!(1), json!("OK"))]);
/// assert_eq!(grades.convert_value(json!(0)).value, json!("bad"));
/// assert_eq!(grades.convert_value(json!(2)).value, json!(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Translate {
    table: Vec<(Value, Value)>,
}

impl Translate {
    /// Creates a lookup converter from `(from, to)` pairs.
    #[must_use]
    pub fn new(table: Vec<(Value, Value)>) -> Self {
        Self { table }
    }
}

impl Convert for Translate {
    fn convert(&self, value: Value, _ctx: &Context) -> Converted {
        match self.table.iter().find(|(from, _)| *from == value) {
            Some((_, to)) => Converted::ok(to.clone()),
            None => Converted::ok(value),
        }
    }
}

/// Creates a lookup-table converter.
#[must_use]
pub fn translate(table: Vec<(Value, Value)>) -> Translate {
    Translate::new(table)
}

// ============================================================================
// TESTS
// ============================================================================
