//! Error types for validator setup and value validation.
//!
//! Two channels:
//!
//! - [`SetupError`]: the validator itself is misconfigured. Reported once,
//!   at construction, through [`ProgramContext::fatal_error`] or as the
//!   `Err` of [`Validator::try_new`].
//! - [`ValidationError`]: a user-supplied value was rejected. Returned from
//!   every failing [`Validator::validate`] call; the caller decides whether
//!   to abort, prompt again or propagate.
//!
//! [`ProgramContext::fatal_error`]: crate::program::ProgramContext::fatal_error
//! [`Validator::try_new`]: crate::Validator::try_new
//! [`Validator::validate`]: crate::Validator::validate

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::flags::LeafType;
use crate::value::Value;

/// Boxed error returned by function validators.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ============================================================================
// SETUP ERROR
// ============================================================================

/// A validator specification that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A flag mask with none of the known type flags set.
    #[error("Caporal setup error - Invalid flag validator setup (mask {bits:#x})")]
    InvalidFlags {
        /// The rejected raw mask.
        bits: u32,
    },

    /// A pattern or other non-flag validator that could not be built.
    #[error("Caporal setup error - Invalid validator setup: {reason}")]
    InvalidValidator {
        /// Why the validator was rejected.
        reason: String,
    },
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Which validator rejected the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A function validator returned an error.
    Function,
    /// A regular expression did not match.
    Regex,
    /// A flag validator could not coerce the value to its leaf type.
    Type(LeafType),
}

impl ValidationErrorKind {
    /// Default message for this kind.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Function => "Function validation failed",
            Self::Regex => "RegExp validation failed",
            Self::Type(LeafType::Int) => "Type (INT) validation failed",
            Self::Type(LeafType::Float) => "Type (FLOAT) validation failed",
            Self::Type(LeafType::Bool) => "Type (BOOL) validation failed",
        }
    }
}

/// A rejected value, with enough context to explain why.
///
/// # Examples
///
/// ```rust
/// use caporal_validator::{LeafType, Value, ValidationError, ValidationErrorKind};
///
/// let error = ValidationError::new(ValidationErrorKind::Type(LeafType::Int))
///     .with_value(Value::from("abc"))
///     .with_program("deploy");
///
/// assert_eq!(error.message(), "Type (INT) validation failed");
/// assert_eq!(error.program(), Some("deploy"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: Cow<'static, str>,
    validator: Option<Cow<'static, str>>,
    value: Value,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    program: Option<Arc<str>>,
}

impl ValidationError {
    /// Creates an error of the given kind with its default message.
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.message()),
            validator: None,
            value: Value::Unset,
            source: None,
            program: None,
        }
    }

    /// Replaces the default message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Describes the validator that failed, e.g. the pattern source.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator(mut self, validator: impl Into<Cow<'static, str>>) -> Self {
        self.validator = Some(validator.into());
        self
    }

    /// Attaches the offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Attaches the underlying error, e.g. the one raised by a function validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(Arc::from(source));
        self
    }

    /// Tags the error with the name of the owning program.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_program(mut self, program: impl Into<Arc<str>>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// What kind of validator rejected the value.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Description of the failing validator, if recorded.
    #[must_use]
    pub fn validator(&self) -> Option<&str> {
        self.validator.as_deref()
    }

    /// The rejected value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Name of the program the validator belongs to.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// The wrapped underlying error, if any.
    #[must_use]
    pub fn original_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(program) = &self.program {
            write!(f, "[{program}] ")?;
        }
        f.write_str(&self.message)?;

        if !self.value.is_unset() {
            write!(f, " (value: {:?})", self.value.to_string())?;
        }
        if let Some(validator) = &self.validator {
            write!(f, " [validator: {validator}]")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for ValidationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}
