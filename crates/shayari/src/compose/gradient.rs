//! The Square card background.

use shayari_core::{
    color::Color,
    draw::{Circle, LinearGradient, Rect, RenderLayer, Scene},
    geometry::Point,
    palette::Palette,
};

/// Paints a palette as a diagonal gradient with a soft wash and two accent
/// circles.
///
/// Paint order is gradient, then the 10% white wash, then the 20% white
/// circles; everything lands below the text layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientSynthesizer;

impl GradientSynthesizer {
    /// Center and radius of the top-left accent.
    const TOP_ACCENT: (f32, f32, f32) = (150.0, 150.0, 150.0);
    /// Radius and inset from the bottom-right corner of the second accent.
    const BOTTOM_ACCENT: (f32, f32) = (200.0, 150.0);

    /// Adds the background commands for `palette` to `scene`.
    pub fn fill(scene: &mut Scene, palette: &Palette) {
        let size = scene.size();
        let [first, middle, last] = palette.gradient_stops();

        let gradient = LinearGradient::new(Point::default(), Point::new(size.width(), size.height()))
            .with_stop(0.0, first)
            .with_stop(0.5, middle)
            .with_stop(1.0, last);
        scene.draw(
            RenderLayer::Background,
            Point::default(),
            Rect::new(size).with_fill(gradient),
        );

        scene.draw(
            RenderLayer::Overlay,
            Point::default(),
            Rect::new(size).with_fill(Color::white().with_alpha(0.1)),
        );

        let accent = Color::white().with_alpha(0.2);
        let (x, y, radius) = Self::TOP_ACCENT;
        scene.draw(
            RenderLayer::Overlay,
            Point::new(x, y),
            Circle::new(radius).with_fill(accent),
        );
        let (radius, inset) = Self::BOTTOM_ACCENT;
        scene.draw(
            RenderLayer::Overlay,
            Point::new(size.width() - inset, size.height() - inset),
            Circle::new(radius).with_fill(accent),
        );
    }
}

#[cfg(test)]
mod tests {
    use shayari_core::{
        draw::{Fill, Primitive},
        geometry::Size,
        palette::{PaletteId, PaletteStore},
    };

    use super::*;

    #[test]
    fn test_fill_paint_order() {
        let mut scene = Scene::new(Size::new(1080.0, 1080.0));
        GradientSynthesizer::fill(&mut scene, PaletteStore::get(PaletteId::Gradient1));

        let layers: Vec<_> = scene.commands().iter().map(|c| c.layer()).collect();
        assert_eq!(
            layers,
            [
                RenderLayer::Background,
                RenderLayer::Overlay,
                RenderLayer::Overlay,
                RenderLayer::Overlay
            ]
        );
    }

    #[test]
    fn test_gradient_uses_palette_stops() {
        let mut scene = Scene::new(Size::new(1080.0, 1080.0));
        GradientSynthesizer::fill(&mut scene, PaletteStore::get(PaletteId::Gradient2));

        let Primitive::Rect(rect) = scene.commands()[0].primitive() else {
            panic!("background should be a rect");
        };
        let Some(Fill::LinearGradient(gradient)) = rect.fill() else {
            panic!("background should be a gradient");
        };
        assert_eq!(gradient.end(), Point::new(1080.0, 1080.0));
        let stops: Vec<_> = gradient
            .stops()
            .iter()
            .map(|stop| (stop.offset(), stop.color().to_string()))
            .collect();
        assert_eq!(
            stops,
            [
                (0.0, "#2563eb".to_string()),
                (0.5, "#0891b2".to_string()),
                (1.0, "#0d9488".to_string())
            ]
        );
    }

    #[test]
    fn test_accent_circles_follow_canvas() {
        let mut scene = Scene::new(Size::new(1080.0, 1080.0));
        GradientSynthesizer::fill(&mut scene, PaletteStore::get(PaletteId::Gradient1));

        assert_eq!(scene.commands()[2].position(), Point::new(150.0, 150.0));
        assert_eq!(scene.commands()[3].position(), Point::new(930.0, 930.0));
        let Primitive::Circle(circle) = scene.commands()[3].primitive() else {
            panic!("accent should be a circle");
        };
        assert_eq!(circle.radius(), 200.0);
    }
}
