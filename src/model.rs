//! Chart inputs: category labels and data series

use crate::errors::RadarError;
use crate::render::defaults;
use crate::types::{Color, Opacity};

/// How category labels are laid out around the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Straight horizontal text just outside each axis tip
    #[default]
    Basic,
    /// Text curved along a ring between adjacent axes
    Classic,
}

/// The ordered category labels, one per axis
#[derive(Debug, Clone, PartialEq)]
pub struct Categories {
    labels: Vec<String>,
    style: LabelStyle,
    text_point_size: f64,
    label_padding: f64,
}

impl Categories {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            style: LabelStyle::Basic,
            text_point_size: defaults::TEXT_POINT_SIZE,
            label_padding: defaults::LABEL_PADDING,
        }
    }

    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_text_point_size(mut self, size: f64) -> Self {
        self.text_point_size = size;
        self
    }

    /// Space reserved between the outer ring and the surface edge
    pub fn with_label_padding(mut self, padding: f64) -> Self {
        self.label_padding = padding;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn text_point_size(&self) -> f64 {
        self.text_point_size
    }

    pub fn label_padding(&self) -> f64 {
        self.label_padding
    }
}

/// One data region spanning every axis
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
    colour: Color,
    opacity: Opacity,
    stroke: Color,
}

impl Series {
    /// A black, fully opaque series with the default grey outline.
    pub fn new(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
            colour: Color::BLACK,
            opacity: Opacity::OPAQUE,
            stroke: Color::GRID,
        }
    }

    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_opacity(mut self, opacity: Opacity) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    /// Parse and set the fill colour and opacity in one go.
    pub fn styled(self, colour: &str, opacity: f64) -> Result<Self, RadarError> {
        let colour: Color = colour.parse()?;
        let opacity = Opacity::try_new(opacity)
            .map_err(|source| RadarError::InvalidOpacity { value: opacity, source })?;
        Ok(self.with_colour(colour).with_opacity(opacity))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn colour(&self) -> &Color {
        &self.colour
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    /// Check this series against a chart with `num_labels` axes.
    pub(crate) fn validate(&self, num_labels: usize) -> Result<(), RadarError> {
        if self.values.len() != num_labels {
            return Err(RadarError::SeriesLengthMismatch {
                name: self.name.clone(),
                expected: num_labels,
                got: self.values.len(),
            });
        }
        if let Some(index) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(RadarError::NonFiniteValue {
                name: self.name.clone(),
                index,
            });
        }
        Ok(())
    }
}
