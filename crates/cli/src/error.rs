use std::fmt::Display;

use crate::route::Status;
use crate::serve::error::ServeError;

#[derive(Debug)]
pub(crate) enum CliError {
    Serve(ServeError),
    Render { status: Status, message: String },
}

impl From<ServeError> for CliError {
    fn from(error: ServeError) -> Self {
        CliError::Serve(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Serve(error) => write!(f, "{cli_error} {error}"),
            CliError::Render { status, message } if message.is_empty() => {
                write!(f, "{cli_error} {status}")
            }
            CliError::Render { status, message } => write!(f, "{cli_error} {status}: {message}"),
        }
    }
}

impl std::error::Error for CliError {}
