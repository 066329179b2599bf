//! Conversion context
//!
//! A [`Context`] is an immutable object threaded by reference through an
//! entire conversion call tree. It carries the translation function used to
//! localize user-facing error messages, plus arbitrary typed extension data
//! for domain converters that need out-of-band configuration.
//!
//! There is no hidden process-wide default: callers either build a context
//! explicitly or rely on [`Context::new`], which is an ordinary value with
//! identity translation.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Translation function mapping a message to its localized text.
pub type Translator = dyn Fn(&str) -> String + Send + Sync;

// ============================================================================
// CONTEXT
// ============================================================================

/// Read-only context passed to every [`Convert::convert`] call.
///
/// Built once via [`ContextBuilder`] and never mutated afterwards, so a
/// single instance can be shared across concurrent conversions.
///
/// [`Convert::convert`]: crate::foundation::Convert::convert
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::Context;
///
/// let ctx = Context::builder()
///     .with_translator(|message| match message {
///         "Missing value" => "Valeur manquante".to_string(),
///         other => other.to_string(),
///     })
///     .build();
///
/// assert_eq!(ctx.localize("Missing value".into()), "Valeur manquante");
/// ```
#[derive(Default)]
pub struct Context {
    translator: Option<Box<Translator>>,
    data: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Context {
    /// Creates a context with identity translation and no extension data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a context.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Localizes a message through the translation function, or returns it
    /// unchanged when no translator is installed.
    #[must_use]
    pub fn localize(&self, message: Cow<'static, str>) -> Cow<'static, str> {
        match &self.translator {
            Some(translator) => Cow::Owned(translator(&message)),
            None => message,
        }
    }

    /// Returns true if a translation function is installed.
    #[must_use]
    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Gets typed extension data by key.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let ctx = Context::builder().with("max_depth", 4usize).build();
    /// assert_eq!(ctx.get::<usize>("max_depth"), Some(&4));
    /// ```
    #[must_use]
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.data.get(key).and_then(|value| value.downcast_ref())
    }

    /// Checks if an extension key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("translator", &self.translator.is_some())
            .field("data_keys", &self.data.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Context`].
///
/// # Examples
///
/// ```rust,ignore
/// use tamis::foundation::Context;
///
/// let ctx = Context::builder()
///     .with("strict", true)
///     .build();
/// ```
#[derive(Default)]
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    /// Creates a new context builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the translation function.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_translator<F>(mut self, translator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.context.translator = Some(Box::new(translator));
        self
    }

    /// Adds typed extension data under `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Send + Sync + 'static>(mut self, key: impl Into<String>, value: T) -> Self {
        self.context.data.insert(key.into(), Box::new(value));
        self
    }

    /// Builds the context.
    #[must_use]
    pub fn build(self) -> Context {
        self.context
    }
}

// ============================================================================
// TESTS
// ============================================================================
