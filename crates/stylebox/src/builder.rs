//! Builders that render a [StyleBox] into a textual document.
//!
//! Every builder wraps exactly one style box. Grid and point calls mutate
//! that style box and return the builder so calls can be chained; [build]
//! renders the current state and may be called repeatedly.
//!
//! | Builder                 | Output                       | Points rendered |
//! |-------------------------|------------------------------|-----------------|
//! | [SvgStyleBoxBuilder]    | standalone SVG document      | all             |
//! | [HtmlStyleBoxBuilder]   | HTML fragment                | last only       |
//! | [TextStyleBoxBuilder]   | fixed-width character grid   | last only       |
//! | [PngStyleBoxBuilder]    | not implemented              | -               |
//!
//! [build]: StyleBoxBuilder::build

mod html;
mod png;
mod svg;
mod text;

pub use html::HtmlStyleBoxBuilder;
pub use png::PngStyleBoxBuilder;
pub use svg::SvgStyleBoxBuilder;
pub use text::Charset;
pub use text::TextStyleBoxBuilder;

use crate::error::Result;
use crate::stylebox::StyleBox;

/// The capability shared by all style box renderers.
pub trait StyleBoxBuilder {
    /// The wrapped style box.
    fn stylebox(&self) -> &StyleBox;

    /// The wrapped style box, mutably.
    fn stylebox_mut(&mut self) -> &mut StyleBox;

    /// Renders the style box. Repeated calls without intervening mutation
    /// return identical documents.
    fn build(&self) -> Result<String>;

    /// Places grid lines; a missing `ny` mirrors `nx`.
    ///
    /// Renderers with additional placement rules override this method.
    fn grid_lines(&mut self, nx: i32, ny: Option<i32>) -> Result<&mut Self> {
        self.stylebox_mut().set_gridlines(nx, ny)?;
        Ok(self)
    }

    /// Places `nx` vertical and `ny` horizontal grid lines.
    fn grid(&mut self, nx: i32, ny: i32) -> Result<&mut Self> {
        self.grid_lines(nx, Some(ny))
    }

    /// Places `n` grid lines along both axes.
    fn square_grid(&mut self, n: i32) -> Result<&mut Self> {
        self.grid_lines(n, None)
    }

    /// Adds a point; points outside of the domain are dropped.
    fn point(&mut self, x: f64, y: f64) -> &mut Self {
        self.stylebox_mut().add_point(x, y);
        self
    }
}
