//! Linear rescaling between numeric intervals.

/// Maps `x` from the `[from_lo, from_hi]` interval onto `[to_lo, to_hi]`.
///
/// The mapping is affine, so values outside the source interval land
/// outside the target interval, and a reversed target (`to_lo > to_hi`)
/// flips the direction. `from_lo` must differ from `from_hi`.
///
/// ```
/// use stylebox::scale::rescale;
///
/// assert_eq!(rescale(0.5, 0.0, 1.0, 0.0, 300.0), 150.0);
/// assert_eq!(rescale(2.0, 0.0, 4.0, 100.0, 0.0), 50.0);
/// ```
#[inline]
pub fn rescale(x: f64, from_lo: f64, from_hi: f64, to_lo: f64, to_hi: f64) -> f64 {
    to_lo + (x - from_lo) / (from_hi - from_lo) * (to_hi - to_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_endpoints() {
        let cases = [
            (0.0, 1.0, 0.0, 300.0),
            (-2.0, 6.0, 0.0, 6.0),
            (10.0, 20.0, 0.0, 100.0),
            (0.0, 1.0, 300.0, 0.0),
        ];

        for (from_lo, from_hi, to_lo, to_hi) in cases {
            assert_eq!(rescale(from_lo, from_lo, from_hi, to_lo, to_hi), to_lo);
            assert_eq!(rescale(from_hi, from_lo, from_hi, to_lo, to_hi), to_hi);
        }
    }

    #[test]
    fn interior_values_stay_inside_target() {
        for i in 0..=100 {
            let x = -5.0 + f64::from(i) * 0.1;
            let y = rescale(x, -5.0, 5.0, 0.0, 6.0);
            assert!((0.0..=6.0).contains(&y), "{x} mapped to {y}");

            let reversed = rescale(x, -5.0, 5.0, 6.0, 0.0);
            assert!((0.0..=6.0).contains(&reversed), "{x} mapped to {reversed}");
        }
    }

    #[test]
    fn thirds_of_the_svg_canvas() {
        assert_eq!(format!("{:.3}", rescale(1.0 / 3.0, 0.0, 1.0, 0.0, 300.0)), "100.000");
        assert_eq!(format!("{:.3}", rescale(2.0 / 3.0, 0.0, 1.0, 0.0, 300.0)), "200.000");
    }

    #[test]
    fn values_outside_the_source_are_not_clamped() {
        assert_eq!(rescale(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(rescale(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }
}
