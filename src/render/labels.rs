//! Category label placement strategies
//!
//! Each label style is its own type that knows how to place every category
//! label (and any label-specific grid decoration) for a computed layout.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::RenderOptions;
use super::defaults;
use super::primitives::{
    ArcPath, BaselineShift, CurvedLabel, DrawingSink, Label, Ring, Segment, Sweep, TextAnchor,
};
use crate::layout::{RadarLayout, is_lower_half, polar_point};
use crate::model::{Categories, LabelStyle};
use crate::types::{Angle, Color};

/// Common behavior for all label styles
#[enum_dispatch]
pub trait LabelPlacement {
    /// Emit the labels for every axis into `sink`.
    fn place(&self, layout: &RadarLayout, labels: &[String], sink: &mut dyn DrawingSink);
}

/// All label styles, dispatched without boxing
#[enum_dispatch(LabelPlacement)]
#[derive(Debug, Clone, PartialEq)]
pub enum LabelRenderer {
    BasicLabels,
    ClassicLabels,
}

impl LabelRenderer {
    pub fn for_categories(categories: &Categories, options: &RenderOptions) -> Self {
        let font_size = categories.text_point_size();
        match categories.style() {
            LabelStyle::Basic => BasicLabels { font_size }.into(),
            LabelStyle::Classic => ClassicLabels {
                font_size,
                id_prefix: options.id_prefix.clone(),
                stroke: options.grid_stroke.clone(),
            }
            .into(),
        }
    }
}

// ============================================================================
// Basic
// ============================================================================

/// Horizontal text just beyond each axis tip
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLabels {
    pub font_size: f64,
}

/// Alignment of a basic label so it grows away from the chart.
pub fn text_anchor_for(angle: Angle) -> TextAnchor {
    let a = angle.raw();
    if a == 0.0 || a == 180.0 {
        TextAnchor::Middle
    } else if a > 180.0 {
        TextAnchor::End
    } else {
        TextAnchor::Start
    }
}

impl BasicLabels {
    /// Anchor point of the label on axis `index`.
    ///
    /// x is pushed out by a fixed nudge, y by a full font size, then the
    /// baseline drops by a quarter font size so the text centres on the tip.
    pub fn position(&self, layout: &RadarLayout, index: usize) -> DVec2 {
        let angle = layout.axis_angle(index);
        let ts = self.font_size;
        DVec2::new(
            layout.centre.x + (layout.radius + defaults::BASIC_LABEL_NUDGE) * angle.sin(),
            layout.centre.y - (layout.radius + ts) * angle.cos()
                + defaults::BASIC_BASELINE_FACTOR * ts,
        )
    }
}

impl LabelPlacement for BasicLabels {
    fn place(&self, layout: &RadarLayout, labels: &[String], sink: &mut dyn DrawingSink) {
        for (i, label) in labels.iter().enumerate() {
            sink.add_text(Label {
                position: self.position(layout, i),
                anchor: text_anchor_for(layout.axis_angle(i)),
                font_size: self.font_size,
                content: label.clone(),
            });
        }
    }
}

// ============================================================================
// Classic
// ============================================================================

/// Text curved along a ring, boxed between two extra rings and
/// separated by ticks halfway between axes
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicLabels {
    pub font_size: f64,
    pub id_prefix: String,
    pub stroke: Color,
}

impl ClassicLabels {
    /// Tick between the two label rings, half a step clockwise of axis `index`.
    pub fn tick(&self, layout: &RadarLayout, index: usize) -> Segment {
        let angle = layout.axis_angle(index) + half(layout.step);
        Segment {
            from: polar_point(
                layout.centre,
                layout.radius + defaults::CLASSIC_INNER_RING,
                angle,
            ),
            to: polar_point(
                layout.centre,
                layout.radius + defaults::CLASSIC_OUTER_RING,
                angle,
            ),
            stroke: self.stroke.clone(),
        }
    }

    /// Arc spanning half a step either side of axis `index`, plus the
    /// baseline shift that keeps the text upright on that half of the chart.
    pub fn arc(&self, layout: &RadarLayout, index: usize) -> (ArcPath, BaselineShift) {
        let angle = layout.axis_angle(index);
        let radius = layout.radius + defaults::CLASSIC_TEXT_RING;
        let leading = polar_point(layout.centre, radius, angle - half(layout.step));
        let trailing = polar_point(layout.centre, radius, angle + half(layout.step));

        if is_lower_half(angle) {
            let arc = ArcPath {
                start: trailing,
                end: leading,
                radius,
                sweep: Sweep::CounterClockwise,
            };
            (arc, BaselineShift::Below)
        } else {
            let arc = ArcPath {
                start: leading,
                end: trailing,
                radius,
                sweep: Sweep::Clockwise,
            };
            (arc, BaselineShift::Above)
        }
    }

    fn ring(&self, layout: &RadarLayout, extra: f64) -> Ring {
        Ring {
            centre: layout.centre,
            radius: layout.radius + extra,
            stroke: self.stroke.clone(),
            fill: Color::None,
        }
    }
}

impl LabelPlacement for ClassicLabels {
    fn place(&self, layout: &RadarLayout, labels: &[String], sink: &mut dyn DrawingSink) {
        sink.add_circle(self.ring(layout, defaults::CLASSIC_INNER_RING));
        sink.add_circle(self.ring(layout, defaults::CLASSIC_OUTER_RING));

        for (i, label) in labels.iter().enumerate() {
            sink.add_line(self.tick(layout, i));

            let (arc, baseline_shift) = self.arc(layout, i);
            sink.add_curved_text(CurvedLabel {
                id: format!("{}{}", self.id_prefix, i),
                arc,
                baseline_shift,
                font_size: self.font_size,
                content: label.clone(),
            });
        }
    }
}

fn half(step: Angle) -> Angle {
    Angle(step.raw() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NormalizationPolicy;
    use crate::render::recording::{Primitive, RecordingSurface};
    use glam::dvec2;

    fn layout(n: usize) -> RadarLayout {
        let cats = Categories::new((0..n).map(|i| format!("c{i}")));
        RadarLayout::compute(Some(200.0), Some(200.0), &cats, &[], NormalizationPolicy::Unified)
            .unwrap()
    }

    fn classic() -> ClassicLabels {
        ClassicLabels {
            font_size: 18.0,
            id_prefix: "label".into(),
            stroke: Color::GRID,
        }
    }

    #[test]
    fn basic_anchor_table() {
        assert_eq!(text_anchor_for(Angle(0.0)), TextAnchor::Middle);
        assert_eq!(text_anchor_for(Angle(90.0)), TextAnchor::Start);
        assert_eq!(text_anchor_for(Angle(180.0)), TextAnchor::Middle);
        assert_eq!(text_anchor_for(Angle(270.0)), TextAnchor::End);
        assert_eq!(text_anchor_for(Angle(72.0)), TextAnchor::Start);
        assert_eq!(text_anchor_for(Angle(216.0)), TextAnchor::End);
    }

    #[test]
    fn basic_position_top_axis() {
        let layout = layout(4);
        let basic = BasicLabels { font_size: 18.0 };
        // radius 60, centre (100, 100): y = 100 - 78 + 4.5
        assert_eq!(basic.position(&layout, 0), dvec2(100.0, 26.5));

        let right = basic.position(&layout, 1);
        assert!((right.x - 165.0).abs() < 1e-9);
        assert!((right.y - 104.5).abs() < 1e-9);
    }

    #[test]
    fn basic_places_one_label_per_axis() {
        let layout = layout(5);
        let labels: Vec<String> = (0..5).map(|i| format!("c{i}")).collect();
        let mut sink = RecordingSurface::new(200.0, 200.0);
        BasicLabels { font_size: 12.0 }.place(&layout, &labels, &mut sink);

        let texts: Vec<_> = sink
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 5);
        assert!(texts.iter().all(|t| t.font_size == 12.0));
        assert_eq!(texts[2].content, "c2");
    }

    #[test]
    fn classic_top_axis_runs_clockwise_above() {
        let layout = layout(4);
        let (arc, shift) = classic().arc(&layout, 0);
        assert_eq!(shift, BaselineShift::Above);
        assert_eq!(arc.sweep, Sweep::Clockwise);
        assert_eq!(arc.radius, 78.0);
        // Starts left of the axis (at -45 degrees), ends right of it
        assert!(arc.start.x < 100.0);
        assert!(arc.end.x > 100.0);
    }

    #[test]
    fn classic_bottom_axis_runs_counter_clockwise_below() {
        let layout = layout(4);
        let (arc, shift) = classic().arc(&layout, 2);
        assert_eq!(shift, BaselineShift::Below);
        assert_eq!(arc.sweep, Sweep::CounterClockwise);
        // Runs from the trailing side (225 degrees, lower left) to the leading side
        assert!(arc.start.x < 100.0);
        assert!(arc.end.x > 100.0);
        assert!(arc.start.y > 100.0 && arc.end.y > 100.0);
    }

    #[test]
    fn classic_tick_sits_between_axes() {
        let layout = layout(4);
        let tick = classic().tick(&layout, 0);
        // 45 degrees: equal x and y displacement
        let d_from = tick.from - layout.centre;
        assert!((d_from.x + d_from.y).abs() < 1e-9);
        assert!((d_from.length() - 70.0).abs() < 1e-9);
        assert!(((tick.to - layout.centre).length() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn classic_emits_rings_ticks_and_curved_labels() {
        let layout = layout(3);
        let labels: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut sink = RecordingSurface::new(200.0, 200.0);
        classic().place(&layout, &labels, &mut sink);

        let prims = sink.primitives();
        assert!(matches!(&prims[0], Primitive::Circle(r) if r.radius == 70.0));
        assert!(matches!(&prims[1], Primitive::Circle(r) if r.radius == 90.0));
        assert_eq!(prims.len(), 2 + 3 * 2);
        match &prims[3] {
            Primitive::CurvedText(c) => {
                assert_eq!(c.id, "label0");
                assert_eq!(c.content, "a");
            }
            other => panic!("expected curved text, got {other:?}"),
        }
    }

    #[test]
    fn renderer_follows_category_style() {
        let options = RenderOptions::default();
        let basic = Categories::new(["a"]);
        assert!(matches!(
            LabelRenderer::for_categories(&basic, &options),
            LabelRenderer::BasicLabels(_)
        ));
        let classic = Categories::new(["a"]).with_style(LabelStyle::Classic);
        assert!(matches!(
            LabelRenderer::for_categories(&classic, &options),
            LabelRenderer::ClassicLabels(_)
        ));
    }
}
