//! CLI-level errors (wraps infrastructure errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                    crate::exitcode::NOINPUT
                }
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::InvalidParameter { .. } => crate::exitcode::USAGE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Domain(DomainError::InvalidInput { .. }) => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::Domain(DomainError::StructuralInvariantViolation {
                        ..
                    }) => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn test_exit_codes() {
        let invalid: CliError =
            ApplicationError::from(DomainError::invalid_input("A|B", "illegal character")).into();
        assert_eq!(invalid.exit_code(), exitcode::DATAERR);

        let structural: CliError =
            ApplicationError::from(DomainError::StructuralInvariantViolation { found: 0 }).into();
        assert_eq!(structural.exit_code(), exitcode::SOFTWARE);

        let param: CliError = ApplicationError::invalid_parameter("limit", "must not be negative").into();
        assert_eq!(param.exit_code(), exitcode::USAGE);

        let missing: CliError = InfraError::io(
            "read pages file",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        )
        .into();
        assert_eq!(missing.exit_code(), exitcode::NOINPUT);

        assert_eq!(CliError::Usage("no pages file".into()).exit_code(), exitcode::USAGE);
    }
}
