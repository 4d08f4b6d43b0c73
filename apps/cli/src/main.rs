use std::io::{self, Write};
use std::process::ExitCode;

use caporal_validator::{FatalPolicy, Program, Validator};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod args;

use args::Cli;

/// Exit code when at least one value was rejected.
const REJECTED: u8 = 1;
/// Exit code for setup and usage errors, matching clap's own.
const CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(REJECTED),
        Err(e) => {
            eprintln!("fatal: {e:#}");
            ExitCode::from(CONFIG_ERROR)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CAPORAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Validates every value; returns `false` if any was rejected.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let spec = cli.validator.to_spec()?;
    let program = Program::new(cli.program.as_str())
        .with_policy(FatalPolicy::Exit(i32::from(CONFIG_ERROR)))
        .into_shared();
    let validator = Validator::new(spec, program);
    tracing::debug!(validator = %validator.describe(), count = cli.values.len(), "validating");

    let mut stdout = io::stdout().lock();
    let mut all_ok = true;
    for input in &cli.values {
        let line = match validator.validate(input.as_str()) {
            Ok(value) => json!({ "input": input, "value": value }),
            Err(err) => {
                all_ok = false;
                json!({ "input": input, "error": err.to_string() })
            }
        };
        writeln!(stdout, "{line}")?;
    }
    Ok(all_ok)
}
