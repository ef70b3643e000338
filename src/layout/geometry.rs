//! Polar helpers shared by the layout and the label strategies

use glam::{DVec2, dvec2};

use crate::types::Angle;

/// Point at `radius` from `centre` along `angle` (0 = up, clockwise, SVG Y-down).
#[inline]
pub fn polar_point(centre: DVec2, radius: f64, angle: Angle) -> DVec2 {
    dvec2(
        centre.x + radius * angle.sin(),
        centre.y - radius * angle.cos(),
    )
}

/// Whether an axis sits on the lower half of the chart, where curved labels
/// must run right-to-left to stay upright.
///
/// The inclusive upper bound is 269, so an axis at exactly 269.5 counts as upper.
#[inline]
pub fn is_lower_half(angle: Angle) -> bool {
    (90.0..=269.0).contains(&angle.raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_point_cardinals() {
        let c = dvec2(100.0, 100.0);
        let up = polar_point(c, 10.0, Angle(0.0));
        assert_eq!(up, dvec2(100.0, 90.0));

        let right = polar_point(c, 10.0, Angle(90.0));
        assert!((right - dvec2(110.0, 100.0)).length() < 1e-9);

        let down = polar_point(c, 10.0, Angle(180.0));
        assert!((down - dvec2(100.0, 110.0)).length() < 1e-9);

        let left = polar_point(c, 10.0, Angle(270.0));
        assert!((left - dvec2(90.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn lower_half_bounds() {
        assert!(!is_lower_half(Angle(0.0)));
        assert!(!is_lower_half(Angle(89.9)));
        assert!(is_lower_half(Angle(90.0)));
        assert!(is_lower_half(Angle(180.0)));
        assert!(is_lower_half(Angle(269.0)));
        assert!(!is_lower_half(Angle(270.0)));
    }
}
