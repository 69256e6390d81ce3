use std::fmt::Display;
use std::io;

pub(crate) type Result<T> = std::result::Result<T, ServeError>;

#[derive(Debug)]
pub(crate) enum ServeError {
    Io(io::Error),
    MalformedRequest(String),
}

impl Display for ServeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let serve_error = "serve error:";

        match self {
            ServeError::Io(error) => write!(f, "{serve_error} I/O error: {error}"),
            ServeError::MalformedRequest(line) => {
                write!(f, "{serve_error} malformed request line: `{line}`")
            }
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServeError::Io(error) => Some(error),
            ServeError::MalformedRequest(_) => None,
        }
    }
}

impl From<io::Error> for ServeError {
    fn from(error: io::Error) -> Self {
        ServeError::Io(error)
    }
}
