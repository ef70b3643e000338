//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building or rendering a radar chart
#[derive(Error, Diagnostic, Debug)]
pub enum RadarError {
    #[error("series {name:?} has {got} values but the chart has {expected} categories")]
    #[diagnostic(
        code(radar::chart::series_length_mismatch),
        help("a series needs exactly one value per category label")
    )]
    SeriesLengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("series {name:?} value at index {index} is NaN or infinite")]
    #[diagnostic(code(radar::chart::non_finite_value))]
    NonFiniteValue { name: String, index: usize },

    #[error("invalid chart: {reason}")]
    #[diagnostic(code(radar::chart::invalid_spec))]
    InvalidChartSpec { reason: &'static str },

    #[error("surface {attribute} is missing or unusable: {value:?}")]
    #[diagnostic(
        code(radar::surface::malformed),
        help("width and height must be positive, finite numbers")
    )]
    MalformedSurface {
        attribute: &'static str,
        value: Option<String>,
    },

    #[error("surface of size {size} leaves no room for the chart after {padding} label padding")]
    #[diagnostic(
        code(radar::surface::too_small),
        help("enlarge the surface or reduce the category label padding")
    )]
    SurfaceTooSmall { size: f64, padding: f64 },

    #[error("chart has already been rendered")]
    #[diagnostic(
        code(radar::chart::already_rendered),
        help("rendering appends to the surface; build a new chart to draw again")
    )]
    AlreadyRendered,

    #[error("invalid colour: {value:?}")]
    #[diagnostic(
        code(radar::style::invalid_color),
        help("use `none`, `#rgb`, `#rrggbb`, `rgb(r,g,b)` or a colour keyword")
    )]
    InvalidColor { value: String },

    #[error("invalid opacity {value}")]
    #[diagnostic(code(radar::style::invalid_opacity), help("opacity must lie in [0, 1]"))]
    InvalidOpacity {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("XML serialization error: {message}")]
    #[diagnostic(code(radar::svg::serialize))]
    Serialize { message: String },
}

impl From<crate::types::ColorParseError> for RadarError {
    fn from(err: crate::types::ColorParseError) -> Self {
        RadarError::InvalidColor { value: err.0 }
    }
}
