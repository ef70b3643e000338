//! Facet-derived SVG element types for radar chart output.
//!
//! This crate provides the strongly-typed subset of SVG that a radar chart
//! needs (shapes, text, and text laid along a path), serialized to XML with
//! `facet-xml`. Every attribute is held as its already-formatted string so
//! the caller controls numeric precision.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Circle, Svg, SvgNode};
//!
//! let mut svg = Svg::sized("100", "100");
//! svg.children.push(SvgNode::Circle(Circle {
//!     cx: Some("50".into()),
//!     cy: Some("50".into()),
//!     r: Some("40".into()),
//!     ..Default::default()
//! }));
//!
//! let xml = facet_xml::to_string(&svg).unwrap();
//! assert!(xml.contains("circle"));
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

impl Svg {
    /// An empty document with explicit dimensions and the SVG namespace set.
    pub fn sized(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            xmlns: Some(SVG_NS.to_string()),
            width: Some(width.into()),
            height: Some(height.into()),
            children: Vec::new(),
        }
    }

    /// The first `<defs>` child, created at the front of the document if missing.
    pub fn defs_mut(&mut self) -> &mut Defs {
        let pos = match self
            .children
            .iter()
            .position(|c| matches!(c, SvgNode::Defs(_)))
        {
            Some(pos) => pos,
            None => {
                self.children.insert(0, SvgNode::Defs(Defs::default()));
                0
            }
        };
        match &mut self.children[pos] {
            SvgNode::Defs(defs) => defs,
            _ => unreachable!("position() matched a Defs node"),
        }
    }
}

/// Any SVG node a chart emits
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "text")]
    Text(Text),
}

/// SVG defs element (`<defs>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
}

/// SVG circle element (`<circle>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub r: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
}

/// SVG text element (`<text>`)
///
/// Plain labels use `content`; labels that follow a curve leave it empty and
/// carry a single `<textPath>` child instead.
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<TextNode>,
    #[facet(xml::text)]
    pub content: String,
}

/// Children allowed inside `<text>`
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum TextNode {
    #[facet(rename = "textPath")]
    TextPath(TextPath),
}

/// SVG textPath element (`<textPath>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct TextPath {
    #[facet(xml::attribute)]
    pub href: Option<String>,
    #[facet(xml::attribute, rename = "startOffset")]
    pub start_offset: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "baseline-shift")]
    pub baseline_shift: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

// Re-export facet_xml for convenience
pub use facet_xml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defs_created_once_at_front() {
        let mut svg = Svg::sized("10", "10");
        svg.children.push(SvgNode::Rect(Rect::default()));
        svg.defs_mut().children.push(SvgNode::Path(Path::default()));
        svg.defs_mut().children.push(SvgNode::Path(Path::default()));

        assert_eq!(svg.children.len(), 2);
        match &svg.children[0] {
            SvgNode::Defs(defs) => assert_eq!(defs.children.len(), 2),
            other => panic!("expected defs first, got {other:?}"),
        }
    }
}
