//! Drawing a computed radar layout
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `primitives`: Draw primitives and the `DrawingSink`/`Surface` traits
//! - `labels`: Basic and classic label placement
//! - `svg`: SVG surface
//! - `recording`: Headless surface recording primitives

pub mod defaults;
pub mod labels;
pub mod primitives;
pub mod recording;
pub mod svg;

pub use labels::{BasicLabels, ClassicLabels, LabelPlacement, LabelRenderer};
pub use primitives::*;
pub use recording::{Primitive, RecordingSurface};
pub use svg::SvgSurface;

use crate::layout::{NormalizationPolicy, RadarLayout};
use crate::model::{Categories, Series};
use crate::types::Color;

/// Settings that are not part of the chart data itself
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// How values map onto the radius
    pub normalization: NormalizationPolicy,
    /// Paint white backing rectangles for the surface and the chart square
    pub frame: bool,
    /// Prefix for classic label arc ids; make it unique per chart when
    /// several charts share one document
    pub id_prefix: String,
    /// Colour of axes, rings and ticks
    pub grid_stroke: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            normalization: NormalizationPolicy::default(),
            frame: false,
            id_prefix: defaults::LABEL_ID_PREFIX.to_string(),
            grid_stroke: Color::GRID,
        }
    }
}

/// Emit every primitive of a chart into `sink`, back to front.
///
/// Order: frame, series polygons (insertion order, later on top), axis lines,
/// outer ring, zero ring, then the label style's own primitives.
pub fn draw_chart(
    layout: &RadarLayout,
    categories: &Categories,
    series: &[Series],
    options: &RenderOptions,
    sink: &mut dyn DrawingSink,
) {
    if options.frame {
        draw_frame(layout, sink);
    }

    for s in series {
        sink.add_polygon(Region {
            points: layout.series_vertices(s),
            fill: s.colour().clone(),
            fill_opacity: s.opacity(),
            stroke: s.stroke().clone(),
        });
    }

    for i in 0..layout.num_labels {
        sink.add_line(Segment {
            from: layout.centre,
            to: layout.axis_point(i, layout.radius),
            stroke: options.grid_stroke.clone(),
        });
    }

    sink.add_circle(Ring {
        centre: layout.centre,
        radius: layout.radius,
        stroke: options.grid_stroke.clone(),
        fill: Color::None,
    });

    if let Some(radius) = layout.zero_ring_radius() {
        sink.add_circle(Ring {
            centre: layout.centre,
            radius,
            stroke: options.grid_stroke.clone(),
            fill: Color::None,
        });
    }

    LabelRenderer::for_categories(categories, options).place(layout, categories.labels(), sink);
}

fn draw_frame(layout: &RadarLayout, sink: &mut dyn DrawingSink) {
    sink.add_rect(Frame {
        origin: glam::DVec2::ZERO,
        size: glam::dvec2(layout.width, layout.height),
        stroke: Color::BLACK,
        fill: Color::WHITE,
    });
    sink.add_rect(Frame {
        origin: layout.square_origin(),
        size: glam::dvec2(layout.size, layout.size),
        stroke: Color::BLACK,
        fill: Color::WHITE,
    });
}
