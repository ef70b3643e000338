//! Value normalization: mapping series values onto a fraction of the radius

/// Multiplier leaving room between the largest value and the outer ring
pub const HEADROOM: f64 = 1.1;

/// How raw values are mapped to radial fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationPolicy {
    /// `v / (max * 1.1)`. Assumes non-negative data; negative fractions clamp to 0.
    Headroom,
    /// `(v + offset) / (max + offset)` where `offset = -min` for negative minima.
    /// The largest value touches the outer ring.
    Offset,
    /// Offset shift plus 10% headroom on the shifted span.
    #[default]
    Unified,
}

/// Normalization computed from every value of every series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub policy: NormalizationPolicy,
    pub min_value: f64,
    pub max_value: f64,
    /// Added to every value before scaling; non-zero only for negative minima
    pub offset: f64,
    /// Shifted value that maps to the outer ring
    pub span: f64,
}

impl Scale {
    pub fn from_values(values: impl IntoIterator<Item = f64>, policy: NormalizationPolicy) -> Self {
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        for v in values {
            min_value = min_value.min(v);
            max_value = max_value.max(v);
        }
        if min_value > max_value {
            // No values at all
            min_value = 0.0;
            max_value = 0.0;
        }

        let negative_shift = if min_value < 0.0 { -min_value } else { 0.0 };
        let (offset, span) = match policy {
            NormalizationPolicy::Headroom => (0.0, max_value * HEADROOM),
            NormalizationPolicy::Offset => (negative_shift, max_value + negative_shift),
            NormalizationPolicy::Unified => (
                negative_shift,
                (max_value + negative_shift) * HEADROOM,
            ),
        };

        Self {
            policy,
            min_value,
            max_value,
            offset,
            span,
        }
    }

    /// Fraction of the radius at which `value` is plotted.
    ///
    /// A degenerate span (all zeros, or no series) plots everything at the centre.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.span <= 0.0 {
            return 0.0;
        }
        ((value + self.offset) / self.span).max(0.0)
    }

    /// Fraction of the radius where the value zero sits, when shifted away from the centre.
    ///
    /// `None` when there is no offset, or when zero lies beyond the outer ring
    /// (every value negative).
    pub fn zero_fraction(&self) -> Option<f64> {
        if self.offset == 0.0 || self.span <= 0.0 {
            return None;
        }
        let fraction = self.offset / self.span;
        (fraction <= 1.0).then_some(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn headroom_leaves_ten_percent() {
        let scale = Scale::from_values([0.0, 5.0, 10.0], NormalizationPolicy::Headroom);
        assert!(close(scale.span, 11.0));
        assert!(close(scale.span, 10.0 * HEADROOM));
        assert!(close(scale.fraction(11.0), 1.0));
        assert!(close(scale.fraction(5.5), 0.5));
        assert_eq!(scale.zero_fraction(), None);
    }

    #[test]
    fn headroom_clamps_negative_values() {
        let scale = Scale::from_values([-5.0, 10.0], NormalizationPolicy::Headroom);
        assert_eq!(scale.offset, 0.0);
        assert_eq!(scale.fraction(-5.0), 0.0);
    }

    #[test]
    fn offset_shifts_negative_minimum() {
        let scale = Scale::from_values([-10.0, 20.0, -10.0, 20.0], NormalizationPolicy::Offset);
        assert_eq!(scale.offset, 10.0);
        assert_eq!(scale.fraction(-10.0), 0.0);
        assert_eq!(scale.fraction(20.0), 1.0);
        assert!(close(scale.zero_fraction().unwrap(), 10.0 / 30.0));
    }

    #[test]
    fn offset_without_negatives_is_plain_ratio() {
        let scale = Scale::from_values([2.0, 4.0], NormalizationPolicy::Offset);
        assert_eq!(scale.offset, 0.0);
        assert_eq!(scale.fraction(4.0), 1.0);
        assert_eq!(scale.fraction(2.0), 0.5);
    }

    #[test]
    fn unified_combines_shift_and_headroom() {
        let scale = Scale::from_values([-10.0, 20.0], NormalizationPolicy::Unified);
        assert_eq!(scale.offset, 10.0);
        assert!(close(scale.span, 33.0));
        assert_eq!(scale.fraction(-10.0), 0.0);
        assert!(scale.fraction(20.0) < 1.0);
        assert!(close(scale.zero_fraction().unwrap(), 10.0 / 33.0));
    }

    #[test]
    fn unified_matches_headroom_for_non_negative_data() {
        let values = [1.0, 3.0, 7.0];
        let unified = Scale::from_values(values, NormalizationPolicy::Unified);
        let headroom = Scale::from_values(values, NormalizationPolicy::Headroom);
        for v in values {
            assert!(close(unified.fraction(v), headroom.fraction(v)));
        }
    }

    #[test]
    fn all_negative_data_stays_inside_and_drops_zero_ring() {
        let scale = Scale::from_values([-10.0, -5.0], NormalizationPolicy::Unified);
        assert!(scale.fraction(-5.0) <= 1.0);
        assert_eq!(scale.zero_fraction(), None);
    }

    #[test]
    fn degenerate_span_plots_at_centre() {
        let zeros = Scale::from_values([0.0, 0.0], NormalizationPolicy::Unified);
        assert_eq!(zeros.fraction(0.0), 0.0);

        let empty = Scale::from_values(std::iter::empty(), NormalizationPolicy::Offset);
        assert_eq!(empty.min_value, 0.0);
        assert_eq!(empty.max_value, 0.0);
        assert_eq!(empty.fraction(1.0), 0.0);
    }
}
