//! Document mode: the 1080×1725 notes screenshot.
//!
//! A black page with a top bar (back glyph, title, three icons and an "Edit"
//! action) and a bottom toolbar of five labelled icons. Icons are vector
//! primitives, never font glyphs.

use shayari_core::{
    card::CardData,
    color::Color,
    draw::{
        FontSpec, FontWeight, Icon, IconKind, Polyline, Rect, RenderLayer, Scene,
        StrokeDefinition, Text, TextAnchor, TextBaseline, TextDefinition,
    },
    geometry::Point,
};

use crate::{
    compose::Composer,
    layout::{LayoutSpec, hairline_color},
};

const TOP_BAR_HEIGHT: f32 = 120.0;
const BOTTOM_BAR_HEIGHT: f32 = 200.0;
const ICON_STROKE_WIDTH: f32 = 3.0;

/// Top bar icons and their distance from the right edge.
const TOP_ICONS: [(IconKind, f32); 3] = [
    (IconKind::DownloadSmall, 450.0),
    (IconKind::Share, 350.0),
    (IconKind::Overflow, 250.0),
];

const BOTTOM_ICONS: [(IconKind, &str); 5] = [
    (IconKind::Style, "Style"),
    (IconKind::Preview, "Preview"),
    (IconKind::Download, "Download"),
    (IconKind::Edit, "Edit"),
    (IconKind::Delete, "Delete"),
];

/// Flush-left verse inside notes-app chrome.
#[derive(Debug, Clone)]
pub struct NotesComposer {
    spec: LayoutSpec,
    accent: Color,
}

impl NotesComposer {
    pub fn new(font_family: &str, accent: Color) -> Self {
        Self {
            spec: LayoutSpec::document(font_family),
            accent,
        }
    }

    fn chrome_text(
        &self,
        content: &str,
        font: FontSpec,
        anchor: TextAnchor,
        baseline: TextBaseline,
    ) -> Text {
        let mut style = TextDefinition::new(font, self.accent);
        style.set_anchor(anchor);
        style.set_baseline(baseline);
        Text::new(style, content)
    }

    fn font(&self, size: f32) -> FontSpec {
        FontSpec::new(self.spec.font_family.as_str(), size)
    }

    fn hairline(scene: &mut Scene, y: f32) {
        let width = scene.size().width();
        scene.draw(
            RenderLayer::Chrome,
            Point::new(0.0, y),
            Polyline::line(
                Point::default(),
                Point::new(width, 0.0),
                StrokeDefinition::new(hairline_color(), 1.0),
            ),
        );
    }

    fn paint_top_bar(&self, scene: &mut Scene) {
        let width = scene.size().width();
        let center_y = TOP_BAR_HEIGHT / 2.0;
        let stroke = StrokeDefinition::rounded(self.accent, ICON_STROKE_WIDTH);

        Self::hairline(scene, TOP_BAR_HEIGHT);

        let bold = |size| self.font(size).with_weight(FontWeight::Bold);
        scene.draw(
            RenderLayer::Chrome,
            Point::new(50.0, center_y),
            self.chrome_text("<", bold(48.0), TextAnchor::Start, TextBaseline::Middle),
        );
        scene.draw(
            RenderLayer::Chrome,
            Point::new(110.0, center_y),
            self.chrome_text("Notes", bold(40.0), TextAnchor::Start, TextBaseline::Middle),
        );

        for (kind, inset) in TOP_ICONS {
            scene.draw(
                RenderLayer::Icon,
                Point::new(width - inset, center_y),
                Icon::new(kind, stroke.clone()),
            );
        }

        scene.draw(
            RenderLayer::Chrome,
            Point::new(width - 60.0, center_y),
            self.chrome_text("Edit", bold(38.0), TextAnchor::End, TextBaseline::Middle),
        );
    }

    fn paint_bottom_bar(&self, scene: &mut Scene) {
        let size = scene.size();
        let bar_y = size.height() - BOTTOM_BAR_HEIGHT;
        let slot = size.width() / BOTTOM_ICONS.len() as f32;
        let stroke = StrokeDefinition::rounded(self.accent, ICON_STROKE_WIDTH);

        Self::hairline(scene, bar_y);

        for (index, (kind, label)) in BOTTOM_ICONS.into_iter().enumerate() {
            let x = (index as f32 + 0.5) * slot;
            scene.draw(
                RenderLayer::Icon,
                Point::new(x, bar_y + 40.0),
                Icon::new(kind, stroke.clone()),
            );
            scene.draw(
                RenderLayer::Chrome,
                Point::new(x, bar_y + 130.0),
                self.chrome_text(label, self.font(24.0), TextAnchor::Middle, TextBaseline::Top),
            );
        }
    }
}

impl Composer for NotesComposer {
    fn layout_spec(&self) -> &LayoutSpec {
        &self.spec
    }

    fn paint_backdrop(&self, scene: &mut Scene, _card: &CardData) {
        let size = scene.size();
        scene.draw(
            RenderLayer::Background,
            Point::default(),
            Rect::new(size).with_fill(Color::black()),
        );
        self.paint_top_bar(scene);
        self.paint_bottom_bar(scene);
    }
}

#[cfg(test)]
mod tests {
    use shayari_core::{
        card::CardId,
        draw::{MonospaceTextMeasure, Primitive},
        geometry::Size,
    };

    use super::*;

    fn compose_notes() -> Scene {
        let composer = NotesComposer::new("Arial", Color::new("#F59E0B").unwrap());
        let card = CardData::new(CardId::new(2), "line", "Mir", "gradient3").unwrap();
        composer.compose(&card, &MonospaceTextMeasure::default())
    }

    fn icons(scene: &Scene) -> Vec<(IconKind, Point)> {
        scene
            .commands()
            .iter()
            .filter_map(|command| match command.primitive() {
                Primitive::Icon(icon) => Some((icon.kind(), command.position())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_document_canvas_and_background() {
        let scene = compose_notes();
        assert_eq!(scene.size(), Size::new(1080.0, 1725.0));
        let first = &scene.commands()[0];
        assert_eq!(first.layer(), RenderLayer::Background);
        let Primitive::Rect(rect) = first.primitive() else {
            panic!("background should be a rect");
        };
        assert_eq!(rect.size(), Size::new(1080.0, 1725.0));
    }

    #[test]
    fn test_top_bar_icons() {
        let icons = icons(&compose_notes());
        assert_eq!(icons.len(), 8);
        assert_eq!(icons[0], (IconKind::DownloadSmall, Point::new(630.0, 60.0)));
        assert_eq!(icons[1], (IconKind::Share, Point::new(730.0, 60.0)));
        assert_eq!(icons[2], (IconKind::Overflow, Point::new(830.0, 60.0)));
    }

    #[test]
    fn test_bottom_toolbar_slots() {
        let icons = icons(&compose_notes());
        let bottom: Vec<_> = icons[3..].to_vec();
        let expected_x = [108.0, 324.0, 540.0, 756.0, 972.0];
        for ((_, position), x) in bottom.iter().zip(expected_x) {
            assert!((position.x() - x).abs() < 0.01, "{position:?}");
            assert_eq!(position.y(), 1565.0);
        }
        assert_eq!(bottom[4].0, IconKind::Delete);
    }

    #[test]
    fn test_chrome_labels() {
        let scene = compose_notes();
        let texts: Vec<_> = scene.texts().collect();
        for label in ["<", "Notes", "Edit", "Style", "Preview", "Download", "Delete"] {
            assert!(texts.contains(&label), "missing {label}");
        }
        assert!(texts.contains(&"line"));
        assert!(texts.contains(&"- Mir"));
    }

    #[test]
    fn test_chrome_uses_accent_color() {
        let scene = compose_notes();
        let edit = scene
            .commands()
            .iter()
            .filter_map(|command| command.primitive().as_text())
            .find(|text| text.content() == "Edit")
            .unwrap();
        assert_eq!(edit.definition().color().to_string(), "#f59e0b");
        assert_eq!(edit.definition().anchor(), TextAnchor::End);
    }
}
