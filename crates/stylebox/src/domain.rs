//! Domain intervals.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::Result;
use crate::error::StyleBoxError;
use crate::scale::rescale;

/// One of the two axes of a style box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A closed interval `[lo, hi]` of real numbers with `lo <= hi`.
///
/// Either bound may be infinite. The default interval is unbounded on
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The interval covering the whole real line.
    pub const UNBOUNDED: Interval = Interval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Creates the `[lo, hi]` interval.
    ///
    /// Fails with [StyleBoxError::InvalidDomain] when a bound is NaN or
    /// when `lo > hi`.
    pub fn new(lo: f64, hi: f64) -> Result<Interval> {
        if lo.is_nan() || hi.is_nan() {
            return Err(StyleBoxError::InvalidDomain(format!(
                "bounds must be numbers, got ({lo}, {hi})"
            )));
        }

        if lo > hi {
            return Err(StyleBoxError::InvalidDomain(format!(
                "lower bound {lo} is greater than upper bound {hi}"
            )));
        }

        Ok(Self { lo, hi })
    }

    /// Lower bound.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width of the interval; infinite for unbounded intervals.
    #[inline]
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether `value` lies within the closed bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Whether the width of the interval is finite.
    ///
    /// Finite bounds are not enough: `[-1e308, 1e308]` overflows.
    pub fn is_bounded(&self) -> bool {
        self.span().is_finite()
    }

    /// Whether the interval is too narrow to be rescaled, which covers zero
    /// and subnormal widths.
    pub fn is_degenerate(&self) -> bool {
        !(self.span() >= f64::MIN_POSITIVE)
    }

    /// Rescales `value` from this interval onto `[to_lo, to_hi]`.
    #[inline]
    pub fn rescale_to(&self, value: f64, to_lo: f64, to_hi: f64) -> f64 {
        rescale(value, self.lo, self.hi, to_lo, to_hi)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::UNBOUNDED
    }
}

impl TryFrom<&[f64]> for Interval {
    type Error = StyleBoxError;

    fn try_from(bounds: &[f64]) -> Result<Self> {
        match *bounds {
            [lo, hi] => Interval::new(lo, hi),
            _ => Err(StyleBoxError::InvalidDomain(format!(
                "expected exactly two bounds, got {}",
                bounds.len()
            ))),
        }
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = StyleBoxError;

    fn try_from((lo, hi): (f64, f64)) -> Result<Self> {
        Interval::new(lo, hi)
    }
}
