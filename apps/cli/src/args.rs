use anyhow::Context;
use caporal_validator::{TypeFlags, ValidatorConfig, ValidatorSpec};
use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "caporal-check",
    version,
    about = "Validate and coerce option values, printing one JSON line per value"
)]
pub struct Cli {
    #[command(flatten)]
    pub validator: ValidatorArgs,

    /// Program name shown in error messages
    #[arg(long, default_value = "caporal-check", env = "CAPORAL_PROGRAM")]
    pub program: String,

    /// Values to validate
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Exactly one way of describing the validator.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ValidatorArgs {
    /// Type flags by name, e.g. `int`, `float|array`, `bool,list`
    #[arg(long = "type", value_name = "FLAGS")]
    pub flags: Option<TypeFlags>,

    /// Raw type flag mask
    #[arg(long, value_name = "BITS")]
    pub mask: Option<u32>,

    /// Regular expression the value must match
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Validator as JSON, e.g. '{"type": "int|array"}' or '{"pattern": "^v\\d+$"}'
    #[arg(long, value_name = "JSON")]
    pub spec: Option<String>,
}

impl ValidatorArgs {
    pub fn to_spec(&self) -> anyhow::Result<ValidatorSpec> {
        if let Some(flags) = self.flags {
            return Ok(flags.into());
        }
        if let Some(bits) = self.mask {
            return Ok(bits.into());
        }
        if let Some(pattern) = &self.pattern {
            return Ok(ValidatorSpec::pattern(pattern.as_str()));
        }
        let json = self.spec.as_deref().unwrap_or_default();
        let config: ValidatorConfig =
            serde_json::from_str(json).context("invalid --spec validator config")?;
        Ok(config.into())
    }
}
