//! Radar geometry: where the chart sits on the surface and where every value lands
//!
//! This module is organized into submodules:
//! - `scale`: value normalization policies
//! - `geometry`: polar helpers

pub mod geometry;
pub mod scale;

pub use geometry::{is_lower_half, polar_point};
pub use scale::{NormalizationPolicy, Scale};

use glam::{DVec2, dvec2};

use crate::errors::RadarError;
use crate::model::{Categories, Series};
use crate::types::Angle;

/// Geometry derived from a surface size, the categories and all series.
///
/// Recomputed on every render; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub width: f64,
    pub height: f64,
    /// Side of the centred square the chart occupies
    pub size: f64,
    pub centre: DVec2,
    /// Radius of the outer ring
    pub radius: f64,
    pub num_labels: usize,
    /// Angle between adjacent axes
    pub step: Angle,
    pub scale: Scale,
}

impl RadarLayout {
    /// Compute the layout for a surface of `width` x `height`.
    ///
    /// Dimensions are optional because a surface may not report them; a
    /// missing, zero, negative or non-finite dimension is a malformed surface.
    /// A text size that is not positive and finite, or a negative or
    /// non-finite padding, is an invalid chart.
    pub fn compute(
        width: Option<f64>,
        height: Option<f64>,
        categories: &Categories,
        series: &[Series],
        policy: NormalizationPolicy,
    ) -> Result<Self, RadarError> {
        if categories.is_empty() {
            return Err(RadarError::InvalidChartSpec {
                reason: "a radar chart needs at least one category",
            });
        }
        let text_point_size = categories.text_point_size();
        if !(text_point_size.is_finite() && text_point_size > 0.0) {
            return Err(RadarError::InvalidChartSpec {
                reason: "label text size must be a positive, finite number",
            });
        }
        let padding = categories.label_padding();
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(RadarError::InvalidChartSpec {
                reason: "label padding must be a finite, non-negative number",
            });
        }

        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;

        let size = width.min(height);
        let radius = size / 2.0 - padding;
        if !(radius > 0.0) {
            return Err(RadarError::SurfaceTooSmall { size, padding });
        }

        let centre = dvec2(
            (width - size) / 2.0 + size / 2.0,
            (height - size) / 2.0 + size / 2.0,
        );
        let num_labels = categories.len();
        let scale = Scale::from_values(
            series.iter().flat_map(|s| s.values().iter().copied()),
            policy,
        );

        crate::log::debug!(
            width,
            height,
            size,
            radius,
            centre_x = centre.x,
            centre_y = centre.y,
            num_labels,
            offset = scale.offset,
            span = scale.span,
            "radar layout"
        );

        Ok(Self {
            width,
            height,
            size,
            centre,
            radius,
            num_labels,
            step: Angle::of_axis(1, num_labels),
            scale,
        })
    }

    /// Angle of axis `index`; axis 0 points straight up.
    #[inline]
    pub fn axis_angle(&self, index: usize) -> Angle {
        Angle::of_axis(index, self.num_labels)
    }

    /// Point on axis `index` at distance `radius` from the centre.
    #[inline]
    pub fn axis_point(&self, index: usize, radius: f64) -> DVec2 {
        polar_point(self.centre, radius, self.axis_angle(index))
    }

    /// Polygon vertices for a series, one per axis in axis order.
    pub fn series_vertices(&self, series: &Series) -> Vec<DVec2> {
        series
            .values()
            .iter()
            .enumerate()
            .map(|(i, &v)| self.axis_point(i, self.radius * self.scale.fraction(v)))
            .collect()
    }

    /// Radius of the ring marking the value zero, when the scale is shifted.
    pub fn zero_ring_radius(&self) -> Option<f64> {
        self.scale.zero_fraction().map(|f| self.radius * f)
    }

    /// Top-left corner of the centred square.
    pub fn square_origin(&self) -> DVec2 {
        dvec2((self.width - self.size) / 2.0, (self.height - self.size) / 2.0)
    }
}

fn check_dimension(attribute: &'static str, value: Option<f64>) -> Result<f64, RadarError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        other => Err(RadarError::MalformedSurface {
            attribute,
            value: other.map(|v| v.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(n: usize) -> Categories {
        Categories::new((0..n).map(|i| format!("c{i}")))
    }

    #[test]
    fn square_surface_geometry() {
        let layout =
            RadarLayout::compute(Some(200.0), Some(200.0), &cats(4), &[], NormalizationPolicy::Unified)
                .unwrap();
        assert_eq!(layout.size, 200.0);
        assert_eq!(layout.radius, 60.0);
        assert_eq!(layout.centre, dvec2(100.0, 100.0));
        assert_eq!(layout.step, Angle(90.0));
    }

    #[test]
    fn wide_surface_centres_the_square() {
        let layout =
            RadarLayout::compute(Some(400.0), Some(200.0), &cats(3), &[], NormalizationPolicy::Unified)
                .unwrap();
        assert_eq!(layout.size, 200.0);
        assert_eq!(layout.centre, dvec2(200.0, 100.0));
        assert_eq!(layout.square_origin(), dvec2(100.0, 0.0));
    }

    #[test]
    fn zero_categories_is_invalid() {
        let err = RadarLayout::compute(Some(100.0), Some(100.0), &cats(0), &[], NormalizationPolicy::Unified)
            .unwrap_err();
        assert!(matches!(err, RadarError::InvalidChartSpec { .. }));
    }

    #[test]
    fn malformed_dimensions_fail_fast() {
        for (w, h, attr) in [
            (None, Some(100.0), "width"),
            (Some(100.0), None, "height"),
            (Some(0.0), Some(100.0), "width"),
            (Some(100.0), Some(-1.0), "height"),
            (Some(f64::NAN), Some(100.0), "width"),
        ] {
            let err = RadarLayout::compute(w, h, &cats(3), &[], NormalizationPolicy::Unified)
                .unwrap_err();
            match err {
                RadarError::MalformedSurface { attribute, .. } => assert_eq!(attribute, attr),
                other => panic!("expected MalformedSurface, got {other:?}"),
            }
        }
    }

    #[test]
    fn padding_larger_than_surface_is_rejected() {
        let err = RadarLayout::compute(Some(60.0), Some(60.0), &cats(3), &[], NormalizationPolicy::Unified)
            .unwrap_err();
        assert!(matches!(err, RadarError::SurfaceTooSmall { .. }));
    }

    #[test]
    fn bad_text_size_or_padding_is_invalid() {
        for size in [f64::NAN, f64::INFINITY, 0.0, -12.0] {
            let err = RadarLayout::compute(
                Some(300.0),
                Some(300.0),
                &cats(3).with_text_point_size(size),
                &[],
                NormalizationPolicy::Unified,
            )
            .unwrap_err();
            assert!(matches!(err, RadarError::InvalidChartSpec { .. }), "text size {size}");
        }
        for padding in [f64::NAN, f64::NEG_INFINITY, -5.0] {
            let err = RadarLayout::compute(
                Some(300.0),
                Some(300.0),
                &cats(3).with_label_padding(padding),
                &[],
                NormalizationPolicy::Unified,
            )
            .unwrap_err();
            assert!(matches!(err, RadarError::InvalidChartSpec { .. }), "padding {padding}");
        }
    }

    #[test]
    fn zero_padding_uses_the_whole_square() {
        let layout = RadarLayout::compute(
            Some(200.0),
            Some(200.0),
            &cats(3).with_label_padding(0.0),
            &[],
            NormalizationPolicy::Unified,
        )
        .unwrap();
        assert_eq!(layout.radius, 100.0);
    }

    #[test]
    fn axis_angles_increase_from_zero() {
        let layout =
            RadarLayout::compute(Some(300.0), Some(300.0), &cats(7), &[], NormalizationPolicy::Unified)
                .unwrap();
        assert_eq!(layout.axis_angle(0), Angle::ZERO);
        for i in 1..7 {
            assert!(layout.axis_angle(i) > layout.axis_angle(i - 1));
            assert!((layout.axis_angle(i).raw() - i as f64 * layout.step.raw()).abs() < 1e-9);
        }
    }
}
