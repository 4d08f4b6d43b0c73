//! The program a validator belongs to.
//!
//! Validators only need two things from their program: a name to tag errors
//! with, and somewhere to report setup errors that make the program itself
//! unusable.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::SetupError;

/// Error-reporting capability injected into every [`Validator`](crate::Validator).
pub trait ProgramContext: Send + Sync {
    /// Program name, attached to validation errors.
    fn name(&self) -> &str;

    /// Receives a setup error raised while building a validator.
    ///
    /// Called synchronously during construction and never by `validate`.
    fn fatal_error(&self, error: SetupError);
}

/// What [`Program`] does with a fatal setup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FatalPolicy {
    /// Keep the error; inspect it with [`Program::fatal_errors`].
    #[default]
    Record,
    /// Log the error and terminate the process with this exit code.
    Exit(i32),
}

/// Default [`ProgramContext`] implementation.
#[derive(Debug, Default)]
pub struct Program {
    name: Arc<str>,
    policy: FatalPolicy,
    errors: Mutex<Vec<SetupError>>,
}

impl Program {
    /// Creates a program that records fatal errors.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            policy: FatalPolicy::Record,
            errors: Mutex::new(Vec::new()),
        }
    }

    /// Sets the fatal-error policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_policy(mut self, policy: FatalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current policy.
    #[must_use]
    pub fn policy(&self) -> FatalPolicy {
        self.policy
    }

    /// Setup errors reported so far (only populated under [`FatalPolicy::Record`]).
    #[must_use]
    pub fn fatal_errors(&self) -> Vec<SetupError> {
        self.errors.lock().clone()
    }

    /// Whether any setup error has been reported.
    #[must_use]
    pub fn has_fatal_errors(&self) -> bool {
        !self.errors.lock().is_empty()
    }

    /// Wraps the program for sharing with validators.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl ProgramContext for Program {
    fn name(&self) -> &str {
        &self.name
    }

    fn fatal_error(&self, error: SetupError) {
        match self.policy {
            FatalPolicy::Record => self.errors.lock().push(error),
            FatalPolicy::Exit(code) => {
                tracing::error!(program = %self.name, code, "exiting after fatal setup error");
                eprintln!("{}: {error}", self.name);
                std::process::exit(code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_errors_by_default() {
        let program = Program::new("tool");
        assert_eq!(program.policy(), FatalPolicy::Record);
        assert!(!program.has_fatal_errors());

        program.fatal_error(SetupError::InvalidFlags { bits: 0 });
        program.fatal_error(SetupError::InvalidValidator {
            reason: "bad".into(),
        });

        assert_eq!(
            program.fatal_errors(),
            vec![
                SetupError::InvalidFlags { bits: 0 },
                SetupError::InvalidValidator {
                    reason: "bad".into()
                },
            ]
        );
    }

    #[test]
    fn name_is_exposed() {
        let program = Program::new("deploy").with_policy(FatalPolicy::Exit(2));
        assert_eq!(program.name(), "deploy");
        assert_eq!(program.policy(), FatalPolicy::Exit(2));
    }
}
