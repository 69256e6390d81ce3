//! The style box state: a scatter plus the positions of its grid lines.

use crate::domain::Axis;
use crate::domain::Interval;
use crate::error::Result;
use crate::error::StyleBoxError;
use crate::scatter::Point;
use crate::scatter::Scatter;

/// The largest number of grid lines [StyleBox::set_gridlines] places on
/// one axis.
pub const MAX_GRID_LINES: i32 = 10_000;

/// Grid line positions in domain coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// x-coordinates of the vertical lines.
    pub vertical: Vec<f64>,
    /// y-coordinates of the horizontal lines.
    pub horizontal: Vec<f64>,
}

/// Accumulates the points and grid lines of a single style box.
#[derive(Debug, Clone)]
pub struct StyleBox {
    scatter: Scatter,
    grid: GridLines,
}

impl StyleBox {
    /// Creates an empty style box over the `x_domain` × `y_domain` rectangle.
    ///
    /// Zero-width domains are rejected since they cannot be rescaled onto a
    /// canvas. Unbounded domains are accepted here and rejected once grid
    /// lines or canvas coordinates are needed.
    pub fn new(x_domain: Interval, y_domain: Interval) -> Result<StyleBox> {
        if x_domain.is_degenerate() {
            return Err(StyleBoxError::DegenerateDomain { axis: Axis::X });
        }

        if y_domain.is_degenerate() {
            return Err(StyleBoxError::DegenerateDomain { axis: Axis::Y });
        }

        Ok(Self {
            scatter: Scatter::new(x_domain, y_domain),
            grid: GridLines::default(),
        })
    }

    /// See [Scatter::add_point].
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        self.scatter.add_point(x, y)
    }

    /// Places `nx` vertical and `ny` horizontal grid lines, replacing any
    /// previous ones.
    ///
    /// Each axis is split into `n + 1` bands of equal width and a line is
    /// placed on every interior band boundary. Negative counts are treated
    /// as zero and a missing `ny` mirrors `nx`. Counts above
    /// [MAX_GRID_LINES] fail with [StyleBoxError::TooManyGridLines].
    pub fn set_gridlines(&mut self, nx: i32, ny: Option<i32>) -> Result<()> {
        let nx = nx.max(0);
        let ny = ny.unwrap_or(nx).max(0);

        let vertical = interior_lines(self.scatter.x_domain(), nx, Axis::X)?;
        let horizontal = interior_lines(self.scatter.y_domain(), ny, Axis::Y)?;

        self.grid = GridLines {
            vertical,
            horizontal,
        };

        Ok(())
    }

    /// Fails with [StyleBoxError::UnboundedDomain] unless both domains are
    /// finite.
    pub fn require_bounded(&self) -> Result<()> {
        if !self.scatter.x_domain().is_bounded() {
            return Err(StyleBoxError::UnboundedDomain { axis: Axis::X });
        }

        if !self.scatter.y_domain().is_bounded() {
            return Err(StyleBoxError::UnboundedDomain { axis: Axis::Y });
        }

        Ok(())
    }

    /// Horizontal domain.
    pub fn x_domain(&self) -> &Interval {
        self.scatter.x_domain()
    }

    /// Vertical domain.
    pub fn y_domain(&self) -> &Interval {
        self.scatter.y_domain()
    }

    /// Accepted points in insertion order.
    pub fn points(&self) -> &[Point] {
        self.scatter.points()
    }

    /// The most recently accepted point.
    pub fn last_point(&self) -> Option<&Point> {
        self.scatter.last_point()
    }

    /// Grid lines from the most recent [StyleBox::set_gridlines] call.
    pub fn grid(&self) -> &GridLines {
        &self.grid
    }
}

fn interior_lines(domain: &Interval, count: i32, axis: Axis) -> Result<Vec<f64>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    if count > MAX_GRID_LINES {
        return Err(StyleBoxError::TooManyGridLines { axis, count });
    }

    if !domain.is_bounded() {
        return Err(StyleBoxError::UnboundedDomain { axis });
    }

    let bands = f64::from(count) + 1.0;

    let lines = (1..=count)
        .map(|i| domain.lo() + domain.span() * f64::from(i) / bands)
        .collect();

    Ok(lines)
}
