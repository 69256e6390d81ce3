use crate::builder::StyleBoxBuilder;
use crate::domain::Interval;
use crate::error::Result;
use crate::stylebox::StyleBox;

// The drawing area is always 300 units wide, whatever the declared size.
const CANVAS: f64 = 300.0;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape (http://www.inkscape.org/) -->
"#;

const AXES: &str = r#"<rect id="axes" stroke-opacity="1.0" height="297.50" width="297.50" y="2.5" x="2.5"/>
"#;

/// Renders a style box as a standalone SVG document.
///
/// Every accepted point is drawn as a filled circle of radius 15 and every
/// grid line spans the whole canvas.
#[derive(Debug, Clone)]
pub struct SvgStyleBoxBuilder {
    stylebox: StyleBox,
    size: u32,
    color: String,
}

impl SvgStyleBoxBuilder {
    /// Creates a builder for a document declared as `size` × `size` pixels,
    /// drawn with `color`.
    pub fn new(
        x_domain: Interval,
        y_domain: Interval,
        size: u32,
        color: impl Into<String>,
    ) -> Result<SvgStyleBoxBuilder> {
        Ok(Self {
            stylebox: StyleBox::new(x_domain, y_domain)?,
            size,
            color: color.into(),
        })
    }

    fn x_to_box_coords(&self, x: f64) -> f64 {
        self.stylebox.x_domain().rescale_to(x, 0.0, CANVAS)
    }

    fn y_to_box_coords(&self, y: f64) -> f64 {
        self.stylebox.y_domain().rescale_to(y, 0.0, CANVAS)
    }

    fn gridlines(&self) -> String {
        let grid = self.stylebox.grid();

        let vertical = grid
            .vertical
            .iter()
            .enumerate()
            .map(|(id, &x)| vertical_gridline(id, self.x_to_box_coords(x)))
            .collect::<Vec<_>>()
            .join("\n");

        let horizontal = grid
            .horizontal
            .iter()
            .enumerate()
            .map(|(id, &y)| horizontal_gridline(id, self.y_to_box_coords(y)))
            .collect::<Vec<_>>()
            .join("\n");

        format!("<g id=\"gridlines\">\n{vertical}{horizontal}</g>\n")
    }

    fn points(&self) -> String {
        let circles = self
            .stylebox
            .points()
            .iter()
            .enumerate()
            .map(|(id, point)| {
                circle(
                    id,
                    self.x_to_box_coords(point.x),
                    self.y_to_box_coords(point.y),
                    &self.color,
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("<g id=\"points\">\n{circles}</g>\n")
    }
}

impl StyleBoxBuilder for SvgStyleBoxBuilder {
    fn stylebox(&self) -> &StyleBox {
        &self.stylebox
    }

    fn stylebox_mut(&mut self) -> &mut StyleBox {
        &mut self.stylebox
    }

    fn build(&self) -> Result<String> {
        self.stylebox.require_bounded()?;

        let svg = svg_element(self.size);
        let group = box_group(&self.color);
        let gridlines = self.gridlines();
        let points = self.points();

        Ok(format!(
            "{HEADER}{svg}<g id=\"layer1\">\n{group}{AXES}{gridlines}{points}</g>\n</g>\n</svg>\n"
        ))
    }
}

fn svg_element(size: u32) -> String {
    format!(
        r##"<svg id="svg2" xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns="http://www.w3.org/2000/svg" height="{size}" width="{size}" version="1.1" xmlns:cc="http://creativecommons.org/ns#" xmlns:dc="http://purl.org/dc/elements/1.1/" viewBox="0 0 302.5 302.5">
"##
    )
}

fn box_group(color: &str) -> String {
    format!("<g id=\"box\" stroke=\"{color}\" stroke-width=\"5\" fill=\"none\">\n")
}

fn vertical_gridline(id: usize, x: f64) -> String {
    format!("<path id=\"vgridline-{id}\" d=\"m{x:.3} 0.0v300\"/>\n")
}

fn horizontal_gridline(id: usize, y: f64) -> String {
    format!("<path id=\"hgridline-{id}\" d=\"m0.0 {y:.3}h300\"/>\n")
}

fn circle(id: usize, x: f64, y: f64, color: &str) -> String {
    format!("<circle id=\"{id}\" cx=\"{x:.3}\" cy=\"{y:.3}\" r=\"15\" fill=\"{color}\"/>\n")
}
