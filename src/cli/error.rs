//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::errors::MansionError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("a mansao nao pode ser montada: {0}")]
    Build(#[source] MansionError),

    #[error("{0}")]
    Mansion(#[from] MansionError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Build(_) => crate::exitcode::BUILD_FAILED,
            CliError::Mansion(MansionError::Io(_)) => crate::exitcode::IOERR,
            CliError::Mansion(_) => crate::exitcode::SOFTWARE,
        }
    }
}
