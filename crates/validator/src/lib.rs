//! # caporal-validator
//!
//! Value validation for command-line options.
//!
//! A [`Validator`] is built from a [`ValidatorSpec`] and checks raw option
//! values, coercing them where the spec asks for it:
//!
//! - **Type flags**: [`TypeFlags::INT`], [`TypeFlags::FLOAT`],
//!   [`TypeFlags::BOOL`], optionally combined with [`TypeFlags::ARRAY`] for
//!   comma-separated lists.
//! - **Regular expressions**: the stringified value must match.
//! - **Functions**: any closure returning the value to keep or an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use caporal_validator::prelude::*;
//!
//! let program = Program::new("deploy").into_shared();
//!
//! let replicas = Validator::new(TypeFlags::INT, program.clone());
//! assert_eq!(replicas.validate("3").unwrap(), Value::Int(3));
//!
//! let ports = Validator::new(TypeFlags::INT | TypeFlags::ARRAY, program.clone());
//! assert_eq!(ports.validate("80,443").unwrap(), Value::from(vec![80, 443]));
//!
//! let err = replicas.validate("many").unwrap_err();
//! assert_eq!(err.message(), "Type (INT) validation failed");
//! ```
//!
//! ## Setup errors
//!
//! A spec that cannot work (no known flag, a pattern that does not compile)
//! is a programming error, not bad user input. [`Validator::new`] reports it
//! through [`ProgramContext::fatal_error`]; [`Validator::try_new`] returns it.

// ValidationError is returned by value from every validation; boxing it would
// add an allocation to each rejected value.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod flags;
pub mod numeric;
pub mod prelude;
pub mod program;
pub mod spec;
mod validator;
pub mod value;

pub use config::ValidatorConfig;
pub use error::{BoxError, SetupError, ValidationError, ValidationErrorKind};
pub use flags::{LeafType, TypeFlags, TypeSpec, UnknownFlag};
pub use program::{FatalPolicy, Program, ProgramContext};
pub use spec::{ValidatorFn, ValidatorSpec};
pub use validator::Validator;
pub use value::Value;
