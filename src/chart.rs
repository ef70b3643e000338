//! Chart assembly: the object API with its render state, and the one-shot functional API

use crate::errors::RadarError;
use crate::layout::RadarLayout;
use crate::model::{Categories, Series};
use crate::render::{RenderOptions, Surface, draw_chart};
use crate::types::{Color, Opacity};

/// Where a chart is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Unrendered,
    Rendered,
}

/// A radar chart bound to the surface it draws into.
///
/// The surface is captured here once and used for both the size read and
/// the drawing. Rendering appends to the surface and happens at most once.
#[derive(Debug)]
pub struct Chart<S: Surface> {
    surface: S,
    categories: Categories,
    series: Vec<Series>,
    options: RenderOptions,
    state: RenderState,
}

impl<S: Surface> Chart<S> {
    pub fn new(surface: S, categories: Categories) -> Self {
        Self {
            surface,
            categories,
            series: Vec::new(),
            options: RenderOptions::default(),
            state: RenderState::Unrendered,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a series, returning the stored copy.
    ///
    /// A series whose length differs from the number of categories, or that
    /// holds a non-finite value, is rejected and the chart is left unchanged.
    pub fn add_series(&mut self, series: Series) -> Result<&Series, RadarError> {
        if self.state == RenderState::Rendered {
            return Err(RadarError::AlreadyRendered);
        }
        if let Err(err) = series.validate(self.categories.len()) {
            crate::log::warn!(series = series.name(), error = %err, "series rejected");
            return Err(err);
        }
        self.series.push(series);
        Ok(&self.series[self.series.len() - 1])
    }

    /// Compute the layout from the surface's current size and draw everything.
    pub fn render(&mut self) -> Result<(), RadarError> {
        if self.state == RenderState::Rendered {
            return Err(RadarError::AlreadyRendered);
        }
        let layout = self.layout()?;
        draw_chart(
            &layout,
            &self.categories,
            &self.series,
            &self.options,
            &mut self.surface,
        );
        self.state = RenderState::Rendered;
        crate::log::debug!(series = self.series.len(), "chart rendered");
        Ok(())
    }

    /// The layout a render would use right now.
    pub fn layout(&self) -> Result<RadarLayout, RadarError> {
        RadarLayout::compute(
            self.surface.width(),
            self.surface.height(),
            &self.categories,
            &self.series,
            self.options.normalization,
        )
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Render a basic-style chart in one call.
///
/// `series_values[k]` is drawn with stroke `line_colors[k]`, fill
/// `fill_colors[k]` and opacity `fill_opacities[k]`; missing styling entries
/// fall back to the series defaults. Every series must match `labels` in length.
pub fn render_radar_chart<S, L>(
    surface: &mut S,
    labels: &[L],
    series_values: &[Vec<f64>],
    line_colors: &[&str],
    fill_colors: &[&str],
    fill_opacities: &[f64],
) -> Result<(), RadarError>
where
    S: Surface,
    L: AsRef<str>,
{
    render_radar_chart_with_options(
        surface,
        labels,
        series_values,
        line_colors,
        fill_colors,
        fill_opacities,
        &RenderOptions::default(),
    )
}

/// [`render_radar_chart`] with explicit options.
///
/// All series are validated before anything is drawn.
pub fn render_radar_chart_with_options<S, L>(
    surface: &mut S,
    labels: &[L],
    series_values: &[Vec<f64>],
    line_colors: &[&str],
    fill_colors: &[&str],
    fill_opacities: &[f64],
    options: &RenderOptions,
) -> Result<(), RadarError>
where
    S: Surface,
    L: AsRef<str>,
{
    let categories = Categories::new(labels.iter().map(|l| l.as_ref().to_string()));

    let mut series = Vec::with_capacity(series_values.len());
    for (k, values) in series_values.iter().enumerate() {
        let mut s = Series::new(format!("series{k}"), values.clone());
        if let Some(stroke) = line_colors.get(k) {
            s = s.with_stroke(stroke.parse::<Color>()?);
        }
        if let Some(fill) = fill_colors.get(k) {
            s = s.with_colour(fill.parse::<Color>()?);
        }
        if let Some(&opacity) = fill_opacities.get(k) {
            let opacity = Opacity::try_new(opacity)
                .map_err(|source| RadarError::InvalidOpacity { value: opacity, source })?;
            s = s.with_opacity(opacity);
        }
        s.validate(categories.len())?;
        series.push(s);
    }

    let layout = RadarLayout::compute(
        surface.width(),
        surface.height(),
        &categories,
        &series,
        options.normalization,
    )?;
    draw_chart(&layout, &categories, &series, options, surface);
    Ok(())
}
