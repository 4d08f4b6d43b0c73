//! Validator specifications as supplied by option definitions.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::BoxError;
use crate::flags::TypeFlags;
use crate::value::Value;

/// Shareable custom validation function.
///
/// Receives the raw value and returns the (possibly transformed) value to
/// store, or an error explaining the rejection.
#[derive(Clone)]
pub struct ValidatorFn(Arc<dyn Fn(&Value) -> Result<Value, BoxError> + Send + Sync>);

impl ValidatorFn {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Calls the wrapped function.
    pub fn call(&self, value: &Value) -> Result<Value, BoxError> {
        (self.0)(value)
    }
}

impl fmt::Debug for ValidatorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidatorFn(..)")
    }
}

/// How a value should be validated.
#[derive(Debug, Clone)]
pub enum ValidatorSpec {
    /// A compiled regular expression the stringified value must match.
    Regex(Regex),
    /// Regular expression source, compiled when the validator is built.
    Pattern(String),
    /// A custom function.
    Function(ValidatorFn),
    /// A raw bitmask of [`TypeFlags`].
    Flags(u32),
}

impl ValidatorSpec {
    /// Function spec from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Function(ValidatorFn::new(f))
    }

    /// Pattern spec from regex source.
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(source.into())
    }
}

impl From<Regex> for ValidatorSpec {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

impl From<TypeFlags> for ValidatorSpec {
    fn from(flags: TypeFlags) -> Self {
        Self::Flags(flags.bits())
    }
}

impl From<u32> for ValidatorSpec {
    fn from(bits: u32) -> Self {
        Self::Flags(bits)
    }
}

impl From<ValidatorFn> for ValidatorSpec {
    fn from(f: ValidatorFn) -> Self {
        Self::Function(f)
    }
}
