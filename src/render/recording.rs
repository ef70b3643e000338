//! Headless surface that records primitives in paint order

use super::primitives::{CurvedLabel, DrawingSink, Frame, Label, Region, Ring, Segment, Surface};

/// Any primitive a chart can emit
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Segment),
    Polygon(Region),
    Circle(Ring),
    Rect(Frame),
    Text(Label),
    CurvedText(CurvedLabel),
}

/// A surface that keeps what it is given instead of drawing it.
///
/// Useful for tests and for feeding non-SVG backends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    width: Option<f64>,
    height: Option<f64>,
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_dimensions(Some(width), Some(height))
    }

    /// A surface that may not report one or both dimensions.
    pub fn with_dimensions(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Series polygons, in paint order.
    pub fn polygons(&self) -> impl Iterator<Item = &Region> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polygon(r) => Some(r),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(s) => Some(s),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Ring> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(r) => Some(r),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn curved_texts(&self) -> impl Iterator<Item = &CurvedLabel> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::CurvedText(t) => Some(t),
            _ => None,
        })
    }
}

impl DrawingSink for RecordingSurface {
    fn add_line(&mut self, line: Segment) {
        self.primitives.push(Primitive::Line(line));
    }

    fn add_polygon(&mut self, polygon: Region) {
        self.primitives.push(Primitive::Polygon(polygon));
    }

    fn add_circle(&mut self, circle: Ring) {
        self.primitives.push(Primitive::Circle(circle));
    }

    fn add_rect(&mut self, rect: Frame) {
        self.primitives.push(Primitive::Rect(rect));
    }

    fn add_text(&mut self, text: Label) {
        self.primitives.push(Primitive::Text(text));
    }

    fn add_curved_text(&mut self, text: CurvedLabel) {
        self.primitives.push(Primitive::CurvedText(text));
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> Option<f64> {
        self.width
    }

    fn height(&self) -> Option<f64> {
        self.height
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }
}
