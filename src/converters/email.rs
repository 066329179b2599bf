//! Email address converters.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::combinators::Pipe;
use crate::foundation::{Context, Convert, ConvertError, Converted};

use super::string::cleanup_line;
use super::Leaf;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^ \t\n\r@<>()]+$").unwrap_or_else(|e| panic!("invalid username pattern: {e}"))
});

// One to 63 characters per label, letters/digits/hyphens, at least one
// dot, and an alphabetic top-level domain.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9][a-z0-9-]{0,62}\.)+[a-z]{2,}$")
        .unwrap_or_else(|e| panic!("invalid domain pattern: {e}"))
});

fn fail(value: String, message: &'static str, ctx: &Context) -> Converted {
    Converted::fail(
        Value::String(value),
        ConvertError::Message(ctx.localize(Cow::Borrowed(message))),
    )
}

/// Converts a clean string to a lowercase email address.
///
/// A leading `mailto:` is stripped. `user@localhost` is accepted.
/// For input that still needs whitespace cleanup, see [`input_to_email`].
#[must_use]
pub fn str_to_email() -> impl Convert {
    Leaf(|value: Value, ctx: &Context| {
        let text = match value {
            Value::String(s) => s.to_lowercase(),
            other => panic!("str_to_email expects a string, got: {other}"),
        };
        let text = match text.strip_prefix("mailto:") {
            Some(rest) => rest.to_owned(),
            None => text,
        };
        let Some((username, domain)) = split_once_exact(&text) else {
            return fail(text, "An email must contain exactly one \"@\"", ctx);
        };
        if !USERNAME_RE.is_match(username) {
            return fail(text, "Invalid username", ctx);
        }
        if domain != "localhost" && !DOMAIN_RE.is_match(domain) {
            return fail(text, "Invalid domain name", ctx);
        }
        Converted::ok(Value::String(text))
    })
}

/// Strips whitespace with [`cleanup_line`], then parses like
/// [`str_to_email`].
#[must_use]
pub fn input_to_email() -> Pipe {
    cleanup_line().then(str_to_email())
}

// Splits on '@' only when it occurs exactly once.
fn split_once_exact(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.splitn(3, '@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(username), Some(domain), None) => Some((username, domain)),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
