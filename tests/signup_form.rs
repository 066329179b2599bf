//! End-to-end scenario: validating a signup form built from the shipped
//! converters.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tamis::prelude::*;
use tamis::{pipe, structure};

fn signup_form() -> Struct {
    structure![
        "username" => pipe![cleanup_line(), input_to_slug(), require()],
        "email" => pipe![input_to_email(), require()],
        "age" => pipe![input_to_int(), test_between(13.0, 130.0)],
        "newsletter" => pipe![guess_bool(), default_to(json!(false))],
    ]
}

#[test]
fn valid_form_is_normalized() {
    let result = signup_form().convert_value(json!({
        "username": "  John Doe  ",
        "email": "mailto:John@Doe.name",
        "age": " 36 ",
        "newsletter": "yes",
    }));
    assert_eq!(
        result,
        Converted::ok(json!({
            "username": "john-doe",
            "email": "john@doe.name",
            "age": 36,
            "newsletter": true,
        }))
    );
}

#[test]
fn absent_optional_fields_get_defaults() {
    let result = signup_form().convert_value(json!({
        "username": "ada",
        "email": "ada@lovelace.name",
    }));
    assert!(result.is_ok());
    assert_eq!(result.value["newsletter"], json!(false));
    assert_eq!(result.value["age"], Value::Null);
}

#[test]
fn every_broken_field_is_reported_at_once() {
    let result = signup_form().convert_value(json!({
        "username": "   ",
        "email": "not-an-email",
        "age": "7",
        "newsletter": "maybe",
        "spurious": 1,
    }));

    let error = result.error.expect("all five fields are wrong");
    assert_eq!(
        error.at_key("username").and_then(ConvertError::as_message),
        Some("Missing value")
    );
    assert_eq!(
        error.at_key("email").and_then(ConvertError::as_message),
        Some("An email must contain exactly one \"@\"")
    );
    assert_eq!(
        error.at_key("age").and_then(ConvertError::as_message),
        Some("Value must be between 13 and 130")
    );
    assert_eq!(
        error.at_key("newsletter").and_then(ConvertError::as_message),
        Some("Value must be a boolean")
    );
    assert_eq!(
        error.at_key("spurious").and_then(ConvertError::as_message),
        Some("Unexpected item")
    );

    // Best-effort output still carries everything that survived.
    assert_eq!(result.value["email"], json!("not-an-email"));
    assert_eq!(result.value["age"], json!(7));
}

fn pair_equality() -> impl Convert {
    test(|v: &Value| {
        v.as_array()
            .is_some_and(|items| items.len() == 2 && items[0] == items[1])
    })
    .with_error("Password mismatch")
}

fn first_item() -> impl Convert {
    function(|v: Value| match v {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    })
}

#[test]
fn credentials_form_normalizes_and_reports_mismatches() {
    let form = structure![
        "username" => pipe![trim(), require()],
        "password" => pipe![pair_equality(), first_item()],
        "email" => str_to_email(),
    ];

    let result = form.convert_value(json!({
        "username": "  John Doe",
        "password": ["secret", "secret"],
        "email": "John@DOE.name",
    }));
    assert_eq!(
        result,
        Converted::ok(json!({
            "username": "John Doe",
            "password": "secret",
            "email": "john@doe.name",
        }))
    );

    let result = form.convert_value(json!({
        "password": ["secret", "other"],
        "email": "John@DOE.name",
    }));
    assert_eq!(result.value["email"], json!("john@doe.name"));
    let error = result.error.expect("username and password are wrong");
    assert_eq!(
        error.at_key("username").and_then(ConvertError::as_message),
        Some("Missing value")
    );
    assert_eq!(
        error.at_key("password").and_then(ConvertError::as_message),
        Some("Password mismatch")
    );
    assert!(error.at_key("email").is_none());
}

#[test]
fn nested_forms_nest_their_errors() {
    let account = structure![
        "owner" => signup_form(),
        "tags" => uniform_set(pipe![cleanup_line(), input_to_slug()]),
    ];
    let result = account.convert_value(json!({
        "owner": {"username": "ada", "email": "broken"},
        "tags": ["Rust Lang", " rust lang ", "  "],
    }));

    assert_eq!(result.value["tags"], json!(["rust-lang", null]));
    let error = result.error.expect("owner.email is broken");
    let owner_error = error.at_key("owner").expect("nested error tree");
    assert!(owner_error.at_key("email").is_some());
    assert!(error.at_key("tags").is_none());
}

#[test]
fn context_translator_localizes_messages() {
    let ctx = ContextBuilder::new()
        .with_translator(|msg| match msg {
            "Missing value" => "Valeur manquante".to_owned(),
            other => other.to_owned(),
        })
        .build();

    let result = signup_form().convert(json!({"email": "ada@lovelace.name"}), &ctx);
    let error = result.error.expect("username is missing");
    assert_eq!(
        error.at_key("username").and_then(ConvertError::as_message),
        Some("Valeur manquante")
    );
}

#[test]
fn check_extraction_for_callers_who_want_results() {
    let ctx = Context::new();
    let value = check(&signup_form(), json!({"username": "ada", "email": "ada@lovelace.name"}), &ctx)
        .expect("form is valid");
    assert_eq!(value["username"], json!("ada"));

    let failure = check(&signup_form(), json!({}), &ctx).expect_err("form is empty");
    assert!(failure.error.at_key("username").is_some());
}
