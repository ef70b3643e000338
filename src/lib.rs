//! Radar (spider) charts rendered to SVG.
//!
//! A chart maps N category labels onto N axes spread evenly around a circle,
//! axis 0 pointing straight up, and draws each data series as a filled polygon
//! whose vertex on axis `i` sits at the series' normalized value. Labels are
//! either straight text beyond each axis tip ([`LabelStyle::Basic`]) or text
//! curved along a ring between neighbouring axes ([`LabelStyle::Classic`]).
//!
//! The geometry never touches a concrete backend: it emits primitives into a
//! [`DrawingSink`]. [`SvgSurface`] builds an SVG document, [`RecordingSurface`]
//! just records.
//!
//! ```rust
//! use radar_chart::{Categories, Chart, LabelStyle, Series, SvgSurface};
//!
//! let categories = Categories::new(["Speed", "Range", "Armour", "Cost"])
//!     .with_style(LabelStyle::Classic);
//! let mut chart = Chart::new(SvgSurface::new(400.0, 400.0), categories);
//! chart.add_series(Series::new("scout", vec![9.0, 6.0, 2.0, 3.0]).styled("#3366cc", 0.5)?)?;
//! chart.render()?;
//! let svg = chart.into_surface().to_svg_string()?;
//! assert!(svg.contains("textPath"));
//! # Ok::<(), radar_chart::RadarError>(())
//! ```

pub mod chart;
pub mod errors;
pub mod layout;
pub mod log;
pub mod model;
pub mod render;
pub mod types;

pub use chart::{Chart, RenderState, render_radar_chart, render_radar_chart_with_options};
pub use errors::RadarError;
pub use layout::{NormalizationPolicy, RadarLayout, Scale};
pub use model::{Categories, LabelStyle, Series};
pub use render::{
    DrawingSink, Primitive, RecordingSurface, RenderOptions, Surface, SvgSurface, draw_chart,
};
pub use types::{Angle, Color, Opacity};
