use crate::builder::StyleBoxBuilder;
use crate::domain::Interval;
use crate::error::Result;
use crate::error::StyleBoxError;
use crate::stylebox::StyleBox;

/// Bitmap output. Accepts grid and point calls, but [build] always fails
/// with [StyleBoxError::NotImplemented].
///
/// [build]: StyleBoxBuilder::build
#[derive(Debug, Clone)]
pub struct PngStyleBoxBuilder {
    stylebox: StyleBox,
}

impl PngStyleBoxBuilder {
    /// Creates a bitmap builder.
    pub fn new(x_domain: Interval, y_domain: Interval) -> Result<PngStyleBoxBuilder> {
        Ok(Self {
            stylebox: StyleBox::new(x_domain, y_domain)?,
        })
    }
}

impl StyleBoxBuilder for PngStyleBoxBuilder {
    fn stylebox(&self) -> &StyleBox {
        &self.stylebox
    }

    fn stylebox_mut(&mut self) -> &mut StyleBox {
        &mut self.stylebox
    }

    fn build(&self) -> Result<String> {
        Err(StyleBoxError::NotImplemented("png"))
    }
}
