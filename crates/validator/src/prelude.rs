//! Prelude module for convenient imports.
//!
//! ```rust
//! use caporal_validator::prelude::*;
//!
//! let validator = Validator::try_new(TypeFlags::BOOL).unwrap();
//! assert_eq!(validator.validate("yes").unwrap(), Value::Bool(true));
//! ```

pub use crate::config::ValidatorConfig;
pub use crate::error::{BoxError, SetupError, ValidationError, ValidationErrorKind};
pub use crate::flags::{LeafType, TypeFlags};
pub use crate::program::{FatalPolicy, Program, ProgramContext};
pub use crate::spec::{ValidatorFn, ValidatorSpec};
pub use crate::validator::Validator;
pub use crate::value::Value;
