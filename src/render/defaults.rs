//! Default sizes and settings (all in surface units)

/// Label font size
pub const TEXT_POINT_SIZE: f64 = 18.0;
/// Gap between the outer ring and the edge of the chart square
pub const LABEL_PADDING: f64 = 40.0;
/// Horizontal nudge of basic labels past the axis tip
pub const BASIC_LABEL_NUDGE: f64 = 5.0;
/// Share of the font size added to basic label baselines
pub const BASIC_BASELINE_FACTOR: f64 = 0.25;
/// Classic style: inner label ring, relative to the outer ring
pub const CLASSIC_INNER_RING: f64 = 10.0;
/// Classic style: outer label ring, relative to the outer ring
pub const CLASSIC_OUTER_RING: f64 = 30.0;
/// Classic style: radius of the arc labels follow, relative to the outer ring
pub const CLASSIC_TEXT_RING: f64 = 18.0;
/// Prefix for the ids of classic label arcs
pub const LABEL_ID_PREFIX: &str = "label";
