//! Vector toolbar icons for the notes document.
//!
//! Each [`IconKind`] is a small set of stroked primitives laid out around the
//! icon's center, roughly 40 pixels across. All parts share one stroke, so an
//! icon recolors with a single [`StrokeDefinition`].

use crate::{
    draw::{Circle, Drawable, Ellipse, LayeredOutput, Polyline, Primitive, Rect, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// The glyphs drawn in the document's top and bottom toolbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Compact download arrow in the top toolbar.
    DownloadSmall,
    Share,
    /// Three vertical dots.
    Overflow,
    /// Palette circle with a cross.
    Style,
    /// Eye outline.
    Preview,
    /// Download arrow in the bottom toolbar.
    Download,
    /// Pencil.
    Edit,
    /// Trash can.
    Delete,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::DownloadSmall => "download-small",
            Self::Share => "share",
            Self::Overflow => "overflow",
            Self::Style => "style",
            Self::Preview => "preview",
            Self::Download => "download",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// An icon glyph painted with a single stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    kind: IconKind,
    stroke: StrokeDefinition,
}

impl Icon {
    pub fn new(kind: IconKind, stroke: StrokeDefinition) -> Self {
        Self { kind, stroke }
    }

    pub fn kind(&self) -> IconKind {
        self.kind
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the primitives making up this icon with their offsets from
    /// the icon's center.
    pub fn parts(&self) -> Vec<(Point, Primitive)> {
        let line = |x1: f32, y1: f32, x2: f32, y2: f32| {
            (
                Point::default(),
                Primitive::from(Polyline::line(
                    Point::new(x1, y1),
                    Point::new(x2, y2),
                    self.stroke.clone(),
                )),
            )
        };
        let chain = |points: &[(f32, f32)]| {
            (
                Point::default(),
                Primitive::from(Polyline::new(
                    points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
                    self.stroke.clone(),
                )),
            )
        };
        let ring = |x: f32, y: f32, radius: f32| {
            (
                Point::new(x, y),
                Primitive::from(Circle::new(radius).with_stroke(self.stroke.clone())),
            )
        };
        let outline = |x: f32, y: f32, width: f32, height: f32| {
            (
                Point::new(x, y),
                Primitive::from(Rect::new(Size::new(width, height)).with_stroke(self.stroke.clone())),
            )
        };

        match self.kind {
            IconKind::DownloadSmall => vec![
                line(0.0, -15.0, 0.0, 5.0),
                chain(&[(-10.0, -5.0), (0.0, 5.0), (10.0, -5.0)]),
                outline(-15.0, 8.0, 30.0, 10.0),
            ],
            IconKind::Share => vec![
                ring(-15.0, 0.0, 6.0),
                ring(15.0, -8.0, 6.0),
                ring(15.0, 8.0, 6.0),
                line(-9.0, 0.0, 9.0, -8.0),
                line(-9.0, 0.0, 9.0, 8.0),
            ],
            IconKind::Overflow => [-10.0, 0.0, 10.0]
                .into_iter()
                .map(|y| {
                    (
                        Point::new(0.0, y),
                        Primitive::from(Circle::new(4.0).with_fill(self.stroke.color())),
                    )
                })
                .collect(),
            IconKind::Style => vec![
                ring(0.0, 0.0, 18.0),
                line(-8.0, -8.0, 8.0, 8.0),
                line(-8.0, 8.0, 8.0, -8.0),
            ],
            IconKind::Preview => vec![
                (
                    Point::default(),
                    Primitive::from(Ellipse::new(25.0, 15.0).with_stroke(self.stroke.clone())),
                ),
                ring(0.0, 0.0, 8.0),
            ],
            IconKind::Download => vec![
                line(0.0, -15.0, 0.0, 10.0),
                chain(&[(-10.0, 0.0), (0.0, 10.0), (10.0, 0.0)]),
                outline(-15.0, 12.0, 30.0, 8.0),
            ],
            IconKind::Edit => vec![
                (
                    Point::default(),
                    Primitive::from(Polyline::closed(
                        vec![
                            Point::new(-12.0, 12.0),
                            Point::new(-8.0, 12.0),
                            Point::new(12.0, -12.0),
                            Point::new(8.0, -16.0),
                        ],
                        self.stroke.clone(),
                    )),
                ),
                line(-12.0, 12.0, -16.0, 16.0),
            ],
            IconKind::Delete => vec![
                outline(-12.0, -8.0, 24.0, 20.0),
                line(-15.0, -8.0, 15.0, -8.0),
                line(-8.0, -8.0, -8.0, -14.0),
                line(8.0, -8.0, 8.0, -14.0),
                line(-6.0, -4.0, -6.0, 8.0),
                line(0.0, -4.0, 0.0, 8.0),
                line(6.0, -4.0, 6.0, 8.0),
            ],
        }
    }
}

impl Drawable for Icon {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for (offset, part) in self.parts() {
            output.merge(part.render_to_layers(position.add_point(offset), layer));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const ALL_KINDS: [IconKind; 8] = [
        IconKind::DownloadSmall,
        IconKind::Share,
        IconKind::Overflow,
        IconKind::Style,
        IconKind::Preview,
        IconKind::Download,
        IconKind::Edit,
        IconKind::Delete,
    ];

    fn accent_stroke() -> StrokeDefinition {
        StrokeDefinition::rounded(Color::new("#F59E0B").unwrap(), 3.0)
    }

    #[test]
    fn test_every_icon_has_parts() {
        for kind in ALL_KINDS {
            let icon = Icon::new(kind, accent_stroke());
            assert!(!icon.parts().is_empty(), "{}", kind.name());
        }
    }

    #[test]
    fn test_icons_stay_within_bounds() {
        // Icons are drawn in a 40px cell; parts are anchored near the center
        for kind in ALL_KINDS {
            for (offset, _) in Icon::new(kind, accent_stroke()).parts() {
                assert!(offset.x().abs() <= 20.0 && offset.y().abs() <= 20.0, "{}", kind.name());
            }
        }
    }

    #[test]
    fn test_overflow_dots_are_filled_with_stroke_color() {
        let icon = Icon::new(IconKind::Overflow, accent_stroke());
        let rendered: String = icon
            .render_to_layers(Point::new(830.0, 60.0), RenderLayer::Icon)
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert_eq!(rendered.matches("<circle").count(), 3);
        assert!(rendered.contains("fill=\"#f59e0b\""));
        assert!(rendered.contains("cy=\"50\""));
        assert!(rendered.contains("cy=\"70\""));
    }

    #[test]
    fn test_icon_parts_are_translated() {
        let icon = Icon::new(IconKind::Share, accent_stroke());
        let rendered: String = icon
            .render_to_layers(Point::new(100.0, 100.0), RenderLayer::Icon)
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert!(rendered.contains("cx=\"85\""));
        assert!(rendered.contains("points=\"91,100 109,92\""));
    }

    #[test]
    fn test_download_chevron_passes_through_points() {
        let icon = Icon::new(IconKind::Download, accent_stroke());
        let chevron = icon
            .parts()
            .into_iter()
            .find_map(|(_, primitive)| match primitive {
                Primitive::Polyline(polyline) if polyline.points().len() == 3 => Some(polyline),
                _ => None,
            })
            .expect("download icon has a chevron");
        assert_eq!(
            chevron.points(),
            [
                Point::new(-10.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 0.0)
            ]
        );

        let rendered: String = icon
            .render_to_layers(Point::new(540.0, 1600.0), RenderLayer::Icon)
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert!(rendered.contains("points=\"530,1600 540,1610 550,1600\""));
    }

    #[test]
    fn test_icon_kind_names_are_unique() {
        let names: std::collections::HashSet<_> = ALL_KINDS.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ALL_KINDS.len());
    }
}
