//! Draw primitives and the sink capability that receives them
//!
//! The layout code only ever talks to [`DrawingSink`]; SVG output and the
//! headless recorder are two implementations of it.

use glam::DVec2;

use super::svg::fmt_num;
use crate::types::{Color, Opacity};

/// Horizontal alignment of a straight label relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical shift of curved text relative to its arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineShift {
    /// Lower-half labels hang below the arc
    Below,
    /// Upper-half labels sit on the arc
    Above,
}

impl BaselineShift {
    pub fn as_str(self) -> &'static str {
        match self {
            BaselineShift::Below => "-40%",
            BaselineShift::Above => "-20%",
        }
    }
}

/// Direction an elliptical arc is traced in (the SVG sweep flag)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Sweep flag 0
    CounterClockwise,
    /// Sweep flag 1
    Clockwise,
}

impl Sweep {
    pub fn flag(self) -> u8 {
        match self {
            Sweep::CounterClockwise => 0,
            Sweep::Clockwise => 1,
        }
    }
}

/// A circular arc of less than a full turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub start: DVec2,
    pub end: DVec2,
    pub radius: f64,
    pub sweep: Sweep,
}

impl ArcPath {
    /// SVG path data: `M x,y A r,r 0 0,sweep x,y`.
    pub fn to_path_data(&self) -> String {
        format!(
            "M{},{} A{},{} 0 0,{} {},{}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.radius),
            fmt_num(self.radius),
            self.sweep.flag(),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
        )
    }
}

/// A straight stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: Color,
}

/// A filled, implicitly closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub points: Vec<DVec2>,
    pub fill: Color,
    pub fill_opacity: Opacity,
    pub stroke: Color,
}

impl Region {
    /// `x,y` pairs separated by spaces, as used by SVG `points`.
    pub fn points_data(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A circle, usually unfilled
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub centre: DVec2,
    pub radius: f64,
    pub stroke: Color,
    pub fill: Color,
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub origin: DVec2,
    pub size: DVec2,
    pub stroke: Color,
    pub fill: Color,
}

/// Straight text at a point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: DVec2,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub content: String,
}

/// Text laid along an arc, centred at half its length
#[derive(Debug, Clone, PartialEq)]
pub struct CurvedLabel {
    /// Identifier of the arc, unique within a document
    pub id: String,
    pub arc: ArcPath,
    pub baseline_shift: BaselineShift,
    pub font_size: f64,
    pub content: String,
}

/// Receives draw primitives in paint order
pub trait DrawingSink {
    fn add_line(&mut self, line: Segment);
    fn add_polygon(&mut self, polygon: Region);
    fn add_circle(&mut self, circle: Ring);
    fn add_rect(&mut self, rect: Frame);
    fn add_text(&mut self, text: Label);
    fn add_curved_text(&mut self, text: CurvedLabel);
}

/// A sink that also reports the size of the area to draw into.
///
/// Rendering appends; callers wanting a fresh drawing call [`Surface::clear`] first.
pub trait Surface: DrawingSink {
    fn width(&self) -> Option<f64>;
    fn height(&self) -> Option<f64>;
    /// Drop everything drawn so far.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn arc_path_data() {
        let arc = ArcPath {
            start: dvec2(10.0, 20.0),
            end: dvec2(30.5, 20.0),
            radius: 78.0,
            sweep: Sweep::Clockwise,
        };
        assert_eq!(arc.to_path_data(), "M10,20 A78,78 0 0,1 30.5,20");
    }

    #[test]
    fn region_points_data() {
        let region = Region {
            points: vec![dvec2(1.0, 2.0), dvec2(3.25, -4.0)],
            fill: Color::BLACK,
            fill_opacity: Opacity::OPAQUE,
            stroke: Color::GRID,
        };
        assert_eq!(region.points_data(), "1,2 3.25,-4");
    }

    #[test]
    fn attribute_strings() {
        assert_eq!(TextAnchor::Middle.as_str(), "middle");
        assert_eq!(BaselineShift::Below.as_str(), "-40%");
        assert_eq!(BaselineShift::Above.as_str(), "-20%");
        assert_eq!(Sweep::CounterClockwise.flag(), 0);
    }
}
