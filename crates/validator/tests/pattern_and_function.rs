//! Integration tests for regular-expression and function validators.

use std::error::Error as _;
use std::fmt;

use caporal_validator::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;

// ============================================================================
// REGEX
// ============================================================================

#[test]
fn regex_returns_matching_value_unchanged() {
    let v = Validator::try_new(Regex::new("^[a-z]+$").unwrap()).unwrap();
    assert_eq!(v.validate("hello").unwrap(), Value::from("hello"));
}

#[test]
fn regex_rejects_non_matching_value() {
    let v = Validator::try_new(ValidatorSpec::pattern("^[a-z]+$")).unwrap();
    let err = v.validate("Hello1").unwrap_err();

    assert_eq!(err.kind(), ValidationErrorKind::Regex);
    assert_eq!(err.message(), "RegExp validation failed");
    assert_eq!(err.value(), &Value::from("Hello1"));
    assert_eq!(err.validator(), Some("/^[a-z]+$/"));
}

#[test]
fn regex_tests_stringified_value() {
    let digits = Validator::try_new(ValidatorSpec::pattern(r"^\d+$")).unwrap();
    assert_eq!(digits.validate(42).unwrap(), Value::Int(42));

    let boolean = Validator::try_new(ValidatorSpec::pattern("^(true|false)$")).unwrap();
    assert_eq!(boolean.validate(true).unwrap(), Value::Bool(true));

    let list = Validator::try_new(ValidatorSpec::pattern("^a,b$")).unwrap();
    assert!(list.validate(Value::from(vec!["a", "b"])).is_ok());
}

#[test]
fn unanchored_regex_matches_substrings() {
    let v = Validator::try_new(ValidatorSpec::pattern("[0-9]")).unwrap();
    assert!(v.validate("abc1").is_ok());
    assert!(v.validate("abc").is_err());
}

// ============================================================================
// FUNCTION
// ============================================================================

#[derive(Debug)]
struct PortError(i64);

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port {} out of range", self.0)
    }
}

impl std::error::Error for PortError {}

fn port_validator() -> Validator {
    Validator::try_new(ValidatorSpec::function(|value| {
        let port = value
            .as_str()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or("not a number")?;
        if (1..=65_535).contains(&port) {
            Ok(Value::Int(port))
        } else {
            Err(PortError(port).into())
        }
    }))
    .unwrap()
}

#[test]
fn function_result_is_returned() {
    assert_eq!(port_validator().validate("8080").unwrap(), Value::Int(8080));
}

#[test]
fn function_error_is_wrapped() {
    let err = port_validator().validate("70000").unwrap_err();

    assert_eq!(err.kind(), ValidationErrorKind::Function);
    assert_eq!(err.message(), "Function validation failed");
    assert_eq!(err.value(), &Value::from("70000"));
    assert_eq!(err.validator(), Some("function"));

    let source = err.source().expect("original error is kept");
    assert_eq!(source.to_string(), "port 70000 out of range");
    assert!(source.downcast_ref::<PortError>().is_some());
}

#[test]
fn function_string_error_is_wrapped() {
    let err = port_validator().validate("http").unwrap_err();
    assert_eq!(
        err.original_error().map(ToString::to_string).as_deref(),
        Some("not a number")
    );
}

#[test]
fn function_may_transform_value() {
    let upper = Validator::try_new(ValidatorSpec::function(|value| {
        Ok(Value::from(value.to_string().to_uppercase()))
    }))
    .unwrap();
    assert_eq!(upper.validate("eu-west").unwrap(), Value::from("EU-WEST"));
}

#[test]
fn function_errors_are_tagged_with_program() {
    let program = Program::new("net").into_shared();
    let v = Validator::new(ValidatorSpec::function(|_| Err("always".into())), program);
    let err = v.validate("x").unwrap_err();
    assert_eq!(err.program(), Some("net"));
    assert_eq!(
        err.to_string(),
        "[net] Function validation failed (value: \"x\") [validator: function]: always"
    );
}
