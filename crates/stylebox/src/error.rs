//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

use tinytemplate::error::Error as TinyTemplateError;

use crate::domain::Axis;
use crate::stylebox::MAX_GRID_LINES;

/// The result type that uses [StyleBoxError] as the error type.
pub type Result<T> = std::result::Result<T, StyleBoxError>;

/// The error type for building and rendering a style box.
#[derive(Debug)]
pub enum StyleBoxError {
    /// The domain is not a well-formed `(lo, hi)` bound pair.
    InvalidDomain(String),

    /// The domain of the given axis has zero or subnormal width, so it
    /// cannot be rescaled onto a canvas.
    DegenerateDomain {
        /// The axis with the zero-width domain.
        axis: Axis,
    },

    /// The width of the given axis domain is not finite, so neither grid
    /// lines nor canvas coordinates can be computed for it.
    UnboundedDomain {
        /// The axis with the unbounded domain.
        axis: Axis,
    },

    /// More grid lines were requested on one axis than a style box holds.
    TooManyGridLines {
        /// The axis with the excess lines.
        axis: Axis,
        /// The requested count.
        count: i32,
    },

    /// The text canvas is too small to hold its own border.
    InvalidCanvasSize(usize),

    /// The requested output format has no renderer yet.
    NotImplemented(&'static str),

    /// A [tinytemplate::error::Error] encountered while rendering a template.
    Template(TinyTemplateError),
}

impl Error for StyleBoxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StyleBoxError::Template(error) => Some(error),
            _ => None,
        }
    }
}

impl Display for StyleBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stylebox_error = "stylebox error:";

        match self {
            StyleBoxError::InvalidDomain(reason) => {
                write!(f, "{stylebox_error} invalid domain: {reason}")
            }
            StyleBoxError::DegenerateDomain { axis } => write!(
                f,
                "{stylebox_error} the {axis} domain is too narrow to be rescaled"
            ),
            StyleBoxError::UnboundedDomain { axis } => write!(
                f,
                "{stylebox_error} the {axis} domain has no finite width; grid lines and canvas coordinates need one"
            ),
            StyleBoxError::TooManyGridLines { axis, count } => write!(
                f,
                "{stylebox_error} {count} grid lines requested on the {axis} axis, at most {MAX_GRID_LINES} are supported"
            ),
            StyleBoxError::InvalidCanvasSize(size) => write!(
                f,
                "{stylebox_error} a text canvas needs a side of at least 2 characters, got {size}"
            ),
            StyleBoxError::NotImplemented(format) => {
                write!(f, "{stylebox_error} the {format} renderer is not implemented")
            }
            StyleBoxError::Template(error) => write!(f, "{stylebox_error} template error: {error}"),
        }
    }
}

impl From<TinyTemplateError> for StyleBoxError {
    fn from(error: TinyTemplateError) -> Self {
        StyleBoxError::Template(error)
    }
}
