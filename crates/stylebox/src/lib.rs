//! Style box diagrams.
//!
//! A style box is a bordered square with optional grid lines and one or
//! more plotted points. The points live in a rectangular domain that is
//! rescaled onto the canvas of the selected output format.
//!
//! ```
//! use stylebox::builder::StyleBoxBuilder;
//! use stylebox::builder::SvgStyleBoxBuilder;
//! use stylebox::domain::Interval;
//!
//! # fn main() -> stylebox::error::Result<()> {
//! let unit = Interval::new(0.0, 1.0)?;
//! let svg = SvgStyleBoxBuilder::new(unit, unit, 50, "#000000")?
//!     .grid(2, 2)?
//!     .point(0.5, 0.5)
//!     .build()?;
//!
//! assert!(svg.contains(r##"<circle id="0" cx="150.000" cy="150.000" r="15" fill="#000000"/>"##));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod domain;
pub mod error;
pub mod scale;
pub mod scatter;
pub mod stylebox;

pub use builder::StyleBoxBuilder;
pub use domain::Axis;
pub use domain::Interval;
pub use error::Result;
pub use error::StyleBoxError;
