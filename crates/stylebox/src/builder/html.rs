use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::builder::StyleBoxBuilder;
use crate::domain::Interval;
use crate::error::Result;
use crate::stylebox::StyleBox;

const TEMPLATE_NAME: &str = "stylebox";

/// Renders a style box as an HTML fragment.
///
/// The fragment is a `size` × `size` block holding a fixed 3×3 table and a
/// marker for the most recently added point. Grid lines set on the style box
/// do not affect the table, and earlier points are not drawn.
#[derive(Debug, Clone)]
pub struct HtmlStyleBoxBuilder {
    stylebox: StyleBox,
    size: u32,
}

impl HtmlStyleBoxBuilder {
    /// Creates a builder for a block of `size` × `size` pixels.
    pub fn new(x_domain: Interval, y_domain: Interval, size: u32) -> Result<HtmlStyleBoxBuilder> {
        Ok(Self {
            stylebox: StyleBox::new(x_domain, y_domain)?,
            size,
        })
    }

    fn marker(&self) -> Option<Marker> {
        self.stylebox.last_point().map(|point| {
            let left = self.stylebox.x_domain().rescale_to(point.x, 0.0, 100.0);
            let top = self.stylebox.y_domain().rescale_to(point.y, 0.0, 100.0);

            Marker {
                left: format!("{left:.3}"),
                top: format!("{top:.3}"),
            }
        })
    }
}

impl StyleBoxBuilder for HtmlStyleBoxBuilder {
    fn stylebox(&self) -> &StyleBox {
        &self.stylebox
    }

    fn stylebox_mut(&mut self) -> &mut StyleBox {
        &mut self.stylebox
    }

    fn build(&self) -> Result<String> {
        self.stylebox.require_bounded()?;

        let mut template = TinyTemplate::new();
        template.add_template(TEMPLATE_NAME, include_str!("../template/stylebox.html.tt"))?;

        let context = Context {
            size: self.size,
            marker: self.marker(),
        };

        Ok(template.render(TEMPLATE_NAME, &context)?)
    }
}

#[derive(Serialize)]
struct Context {
    size: u32,
    marker: Option<Marker>,
}

/// Marker offsets as percentages of the block size.
#[derive(Serialize)]
struct Marker {
    left: String,
    top: String,
}
