//! The validator: checks and coerces a single option value.

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;

use crate::error::{SetupError, ValidationError, ValidationErrorKind};
use crate::flags::{LeafType, TypeFlags, TypeSpec};
use crate::numeric;
use crate::program::ProgramContext;
use crate::spec::{ValidatorFn, ValidatorSpec};
use crate::value::Value;

/// Resolved validator, fixed at construction.
#[derive(Debug, Clone)]
enum Kind {
    Regex(Regex),
    Function(ValidatorFn),
    Types { flags: TypeFlags, spec: TypeSpec },
    /// Setup failed and was reported as fatal; values pass through.
    Inert,
}

/// Validates option values against a [`ValidatorSpec`].
///
/// # Examples
///
/// ```rust
/// use caporal_validator::{TypeFlags, Validator, Value};
///
/// let validator = Validator::try_new(TypeFlags::INT | TypeFlags::ARRAY).unwrap();
/// let value = validator.validate("1,2,3").unwrap();
/// assert_eq!(value, Value::from(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    kind: Kind,
    program: Option<Arc<str>>,
}

impl Validator {
    /// Builds a validator, reporting a malformed spec through the program's
    /// fatal-error channel.
    ///
    /// Construction always yields a validator. If setup failed, the returned
    /// validator is inert and passes every value through unchanged.
    pub fn new(spec: impl Into<ValidatorSpec>, program: Arc<dyn ProgramContext>) -> Self {
        let name: Arc<str> = Arc::from(program.name());
        match Self::resolve(spec.into()) {
            Ok(kind) => Self {
                kind,
                program: Some(name),
            },
            Err(error) => {
                tracing::error!(program = %name, error = %error, "invalid validator setup");
                program.fatal_error(error);
                Self {
                    kind: Kind::Inert,
                    program: Some(name),
                }
            }
        }
    }

    /// Builds a validator without a program, returning setup errors directly.
    pub fn try_new(spec: impl Into<ValidatorSpec>) -> Result<Self, SetupError> {
        Ok(Self {
            kind: Self::resolve(spec.into())?,
            program: None,
        })
    }

    fn resolve(spec: ValidatorSpec) -> Result<Kind, SetupError> {
        let kind = match spec {
            ValidatorSpec::Regex(regex) => Kind::Regex(regex),
            ValidatorSpec::Pattern(source) => {
                let regex = Regex::new(&source).map_err(|e| SetupError::InvalidValidator {
                    reason: e.to_string(),
                })?;
                Kind::Regex(regex)
            }
            ValidatorSpec::Function(f) => Kind::Function(f),
            ValidatorSpec::Flags(bits) => {
                let flags = TypeFlags::from_raw(bits).ok_or(SetupError::InvalidFlags { bits })?;
                Kind::Types {
                    flags,
                    spec: flags.type_spec(),
                }
            }
        };
        Ok(kind)
    }

    /// The flag mask, for flag validators.
    #[must_use]
    pub fn flags(&self) -> Option<TypeFlags> {
        match &self.kind {
            Kind::Types { flags, .. } => Some(*flags),
            _ => None,
        }
    }

    /// Whether setup failed and this validator passes values through.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        matches!(self.kind, Kind::Inert)
    }

    /// Short description of the validator, used in error context.
    #[must_use]
    pub fn describe(&self) -> Cow<'static, str> {
        match &self.kind {
            Kind::Regex(regex) => Cow::Owned(format!("/{}/", regex.as_str())),
            Kind::Function(_) => Cow::Borrowed("function"),
            Kind::Types { flags, .. } => Cow::Owned(format!("flags({flags})")),
            Kind::Inert => Cow::Borrowed("inert"),
        }
    }

    /// Validates and coerces a value.
    pub fn validate(&self, value: impl Into<Value>) -> Result<Value, ValidationError> {
        let value = value.into();
        let result = match &self.kind {
            Kind::Function(f) => self.validate_with_function(f, value),
            Kind::Regex(regex) => self.validate_with_regex(regex, value),
            Kind::Types { spec, .. } => self.validate_with_types(*spec, value, false),
            Kind::Inert => Ok(value),
        };
        if let Err(error) = &result {
            tracing::debug!(
                validator = %self.describe(),
                value = %error.value(),
                error = %error.message(),
                "value rejected"
            );
        }
        result
    }

    fn validate_with_function(
        &self,
        f: &ValidatorFn,
        value: Value,
    ) -> Result<Value, ValidationError> {
        f.call(&value).map_err(|source| {
            self.error(ValidationErrorKind::Function)
                .with_value(value)
                .with_source(source)
        })
    }

    fn validate_with_regex(&self, regex: &Regex, value: Value) -> Result<Value, ValidationError> {
        if regex.is_match(&value.to_string()) {
            Ok(value)
        } else {
            Err(self.error(ValidationErrorKind::Regex).with_value(value))
        }
    }

    fn validate_with_types(
        &self,
        spec: TypeSpec,
        value: Value,
        unary: bool,
    ) -> Result<Value, ValidationError> {
        if spec.array && !unary {
            let items = match value {
                Value::Str(s) => s.split(',').map(Value::from).collect(),
                Value::List(items) => items,
                other => vec![other],
            };
            return items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    tracing::trace!(
                        index,
                        item = %item,
                        ty = item.type_name(),
                        "validating list element"
                    );
                    self.validate_with_types(spec, item, true)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List);
        }

        let Some(leaf) = spec.leaf else {
            return Ok(value);
        };
        let coerced = match leaf {
            LeafType::Int => numeric::is_numeric(&value)
                .then(|| numeric::to_int(&value))
                .flatten()
                .map(Value::Int),
            LeafType::Float => numeric::is_numeric(&value)
                .then(|| numeric::to_float(&value))
                .flatten()
                .map(Value::Float),
            LeafType::Bool => to_bool(&value).map(Value::Bool),
        };
        coerced.ok_or_else(|| self.error(ValidationErrorKind::Type(leaf)).with_value(value))
    }

    fn error(&self, kind: ValidationErrorKind) -> ValidationError {
        let error = ValidationError::new(kind).with_validator(self.describe());
        if let Some(program) = &self.program {
            error.with_program(Arc::clone(program))
        } else {
            error
        }
    }
}

/// Boolean coercion: booleans pass through, otherwise one of
/// `true|false|yes|no|0|1` in any case.
///
/// Only the exact lower-case tokens `0`, `no` and `false` read as `false`,
/// so `"FALSE"` is accepted and reads as `true`.
fn to_bool(value: &Value) -> Option<bool> {
    if let Value::Bool(b) = value {
        return Some(*b);
    }
    let s = value.to_string();
    let accepted = ["true", "false", "yes", "no", "0", "1"]
        .iter()
        .any(|token| s.eq_ignore_ascii_case(token));
    accepted.then(|| !matches!(s.as_str(), "0" | "no" | "false"))
}
