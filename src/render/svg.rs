//! SVG generation

use facet_svg::{
    Circle as SvgCircle, Line as SvgLine, Path, Polygon, Rect, Svg, SvgNode, Text, TextNode,
    TextPath, facet_xml,
};

use super::primitives::{CurvedLabel, DrawingSink, Frame, Label, Region, Ring, Segment, Surface};
use crate::errors::RadarError;

/// A surface backed by an SVG document.
///
/// Width and height are read from the document's attributes at render time,
/// the same way a host page would report them.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    doc: Svg,
}

impl SvgSurface {
    /// An empty document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            doc: Svg::sized(fmt_num(width), fmt_num(height)),
        }
    }

    /// Draw into an existing document, keeping its children.
    pub fn from_document(doc: Svg) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &Svg {
        &self.doc
    }

    pub fn into_document(self) -> Svg {
        self.doc
    }

    /// Serialize the document to XML.
    pub fn to_svg_string(&self) -> Result<String, RadarError> {
        facet_xml::to_string(&self.doc).map_err(|e| RadarError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Parse an SVG length attribute, accepting a bare number or a `px` suffix.
fn parse_length(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim_end();
    value.parse().ok()
}

impl DrawingSink for SvgSurface {
    fn add_line(&mut self, line: Segment) {
        self.doc.children.push(SvgNode::Line(SvgLine {
            x1: Some(fmt_num(line.from.x)),
            y1: Some(fmt_num(line.from.y)),
            x2: Some(fmt_num(line.to.x)),
            y2: Some(fmt_num(line.to.y)),
            stroke: Some(line.stroke.to_string()),
        }));
    }

    fn add_polygon(&mut self, polygon: Region) {
        self.doc.children.push(SvgNode::Polygon(Polygon {
            points: Some(polygon.points_data()),
            fill: Some(polygon.fill.to_string()),
            fill_opacity: Some(fmt_num(polygon.fill_opacity.raw())),
            stroke: Some(polygon.stroke.to_string()),
        }));
    }

    fn add_circle(&mut self, circle: Ring) {
        self.doc.children.push(SvgNode::Circle(SvgCircle {
            cx: Some(fmt_num(circle.centre.x)),
            cy: Some(fmt_num(circle.centre.y)),
            r: Some(fmt_num(circle.radius)),
            fill: Some(circle.fill.to_string()),
            stroke: Some(circle.stroke.to_string()),
        }));
    }

    fn add_rect(&mut self, rect: Frame) {
        self.doc.children.push(SvgNode::Rect(Rect {
            x: Some(fmt_num(rect.origin.x)),
            y: Some(fmt_num(rect.origin.y)),
            width: Some(fmt_num(rect.size.x)),
            height: Some(fmt_num(rect.size.y)),
            fill: Some(rect.fill.to_string()),
            stroke: Some(rect.stroke.to_string()),
        }));
    }

    fn add_text(&mut self, text: Label) {
        self.doc.children.push(SvgNode::Text(Text {
            x: Some(fmt_num(text.position.x)),
            y: Some(fmt_num(text.position.y)),
            font_size: Some(fmt_num(text.font_size)),
            text_anchor: Some(text.anchor.as_str().to_string()),
            content: text.content,
            ..Default::default()
        }));
    }

    fn add_curved_text(&mut self, text: CurvedLabel) {
        // The arc is only a guide for the text, so it goes in <defs> and is never painted
        self.doc.defs_mut().children.push(SvgNode::Path(Path {
            id: Some(text.id.clone()),
            d: Some(text.arc.to_path_data()),
            fill: Some("none".to_string()),
            stroke: None,
        }));

        self.doc.children.push(SvgNode::Text(Text {
            font_size: Some(fmt_num(text.font_size)),
            children: vec![TextNode::TextPath(TextPath {
                href: Some(format!("#{}", text.id)),
                start_offset: Some("50%".to_string()),
                text_anchor: Some("middle".to_string()),
                baseline_shift: Some(text.baseline_shift.as_str().to_string()),
                content: text.content,
            })],
            ..Default::default()
        }));
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> Option<f64> {
        parse_length(self.doc.width.as_deref())
    }

    fn height(&self) -> Option<f64> {
        parse_length(self.doc.height.as_deref())
    }

    fn clear(&mut self) {
        self.doc.children.clear();
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
///
/// Values within 1e-9 of zero print as `0` so that trig round-off
/// (e.g. `cos(90°)`) does not leak into the output.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < 1e-9 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    s.to_string()
}
