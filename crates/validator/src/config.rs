//! Declarative validator configuration.
//!
//! Lets option tables loaded from JSON/TOML describe validators without code:
//!
//! ```json
//! { "type": "int|array" }
//! { "type": ["float"] }
//! { "pattern": "^[a-z]+$" }
//! ```
//!
//! Function validators have no declarative form.

use serde::{Deserialize, Serialize};

use crate::flags::TypeFlags;
use crate::spec::ValidatorSpec;

/// Serialized description of a flag or pattern validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorConfig {
    /// Built-in type flags, as names or a raw mask.
    Type(TypeFlags),
    /// Regular expression source.
    Pattern(String),
}

impl From<ValidatorConfig> for ValidatorSpec {
    fn from(config: ValidatorConfig) -> Self {
        match config {
            ValidatorConfig::Type(flags) => Self::Flags(flags.bits()),
            ValidatorConfig::Pattern(source) => Self::Pattern(source),
        }
    }
}
