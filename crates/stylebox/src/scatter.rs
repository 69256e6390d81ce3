//! Points accepted within a rectangular domain.

use tracing::debug;

use crate::domain::Interval;

/// A point in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A rectangular domain and the points that fell inside it.
#[derive(Debug, Clone)]
pub struct Scatter {
    x_domain: Interval,
    y_domain: Interval,
    points: Vec<Point>,
}

impl Scatter {
    /// Creates an empty scatter over the `x_domain` × `y_domain` rectangle.
    pub fn new(x_domain: Interval, y_domain: Interval) -> Scatter {
        Self {
            x_domain,
            y_domain,
            points: Vec::new(),
        }
    }

    /// Accepts the point if it lies within the closed domain on both axes.
    ///
    /// Returns `false` and drops the point otherwise.
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        let in_range = self.x_domain.contains(x) && self.y_domain.contains(y);

        if in_range {
            self.points.push(Point { x, y });
        } else {
            debug!(x, y, "point outside of the domain dropped");
        }

        in_range
    }

    /// Horizontal domain.
    pub fn x_domain(&self) -> &Interval {
        &self.x_domain
    }

    /// Vertical domain.
    pub fn y_domain(&self) -> &Interval {
        &self.y_domain
    }

    /// Accepted points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently accepted point.
    pub fn last_point(&self) -> Option<&Point> {
        self.points.last()
    }
}

impl Default for Scatter {
    fn default() -> Self {
        Scatter::new(Interval::UNBOUNDED, Interval::UNBOUNDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scatter() -> Scatter {
        let unit = Interval::new(0.0, 1.0).unwrap();
        Scatter::new(unit, unit)
    }

    #[test]
    fn accepts_points_on_the_bounds() {
        let mut scatter = unit_scatter();

        assert!(scatter.add_point(0.0, 0.0));
        assert!(scatter.add_point(1.0, 1.0));
        assert!(scatter.add_point(0.0, 1.0));
        assert_eq!(scatter.points().len(), 3);
    }

    #[test]
    fn drops_points_outside_either_axis() {
        let mut scatter = unit_scatter();

        assert!(!scatter.add_point(1.5, 0.5));
        assert!(!scatter.add_point(0.5, -0.1));
        assert!(!scatter.add_point(f64::NAN, 0.5));
        assert!(scatter.points().is_empty());
        assert_eq!(scatter.last_point(), None);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut scatter = unit_scatter();

        scatter.add_point(0.2, 0.2);
        scatter.add_point(2.0, 2.0);
        scatter.add_point(0.8, 0.8);

        assert_eq!(
            scatter.points(),
            &[Point { x: 0.2, y: 0.2 }, Point { x: 0.8, y: 0.8 }]
        );
        assert_eq!(scatter.last_point(), Some(&Point { x: 0.8, y: 0.8 }));
    }

    #[test]
    fn unbounded_scatter_accepts_any_finite_point() {
        let mut scatter = Scatter::default();

        assert!(scatter.add_point(-1e12, 1e12));
        assert!(scatter.x_domain().span().is_infinite());
        assert!(scatter.y_domain().span().is_infinite());
    }
}
