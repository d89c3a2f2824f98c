//! Integration tests for the CardRenderer API
//!
//! Rendering runs headless with no host fonts loaded and a monospace text
//! measure, so every result is reproducible on any host. Text is painted
//! with the rasterizer's bundled face.

use shayari::{
    CardRenderer, RenderMode, ShayariError,
    card::{CardData, CardId},
    config::{AppConfig, FontConfig, Measurement, StyleConfig, TextConfig},
    export::{raster::PngExporter, svg::SvgExporter},
};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn headless_config() -> AppConfig {
    AppConfig::new(
        StyleConfig::default(),
        TextConfig::new(Measurement::Monospace, 0.6),
        FontConfig::new(Vec::new(), false),
    )
}

fn renderer() -> CardRenderer {
    CardRenderer::new(headless_config()).expect("Failed to build renderer")
}

fn card(id: u64, text: &str, author: &str, background: &str) -> CardData {
    CardData::new(CardId::new(id), text, author, background).expect("Card text is not blank")
}

fn assert_close(actual: [u8; 4], expected: [u8; 3]) {
    for (channel, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.abs_diff(e) <= 4,
            "channel {channel}: got {actual:?}, expected {expected:?}"
        );
    }
    assert_eq!(actual[3], 255);
}

#[test]
fn test_square_render_size_and_filename() {
    let result = renderer()
        .render(RenderMode::Square, &card(7, "Hi", "", "gradient1"))
        .expect("Failed to render");
    assert_eq!(result.raster().width(), 1080);
    assert_eq!(result.raster().height(), 1080);
    assert_eq!(result.suggested_filename(), "shayari-7.png");
    assert_eq!(result.png()[..8], PNG_SIGNATURE);
}

#[test]
fn test_document_render_size_and_filename() {
    let result = renderer()
        .render(RenderMode::Document, &card(7, "Hi", "", "gradient1"))
        .expect("Failed to render");
    assert_eq!(result.raster().width(), 1080);
    assert_eq!(result.raster().height(), 1725);
    assert_eq!(result.suggested_filename(), "shayari-screenshot-7.png");
    assert_eq!(result.into_png()[..8], PNG_SIGNATURE);
}

#[test]
fn test_square_corner_is_washed_first_stop() {
    let result = renderer()
        .render(RenderMode::Square, &card(1, "Hi", "", "gradient1"))
        .expect("Failed to render");
    // #9333ea under a 10% white wash
    let corner = result.raster().pixel(0, 0).unwrap();
    assert_close(corner, [158, 71, 236]);
}

#[test]
fn test_square_accent_circle_brightens() {
    let result = renderer()
        .render(RenderMode::Square, &card(1, "Hi", "", "gradient1"))
        .expect("Failed to render");
    let inside = result.raster().pixel(150, 150).unwrap();
    let outside = result.raster().pixel(150, 330).unwrap();
    assert!(inside[1] > outside[1], "{inside:?} vs {outside:?}");
}

#[test]
fn test_unknown_background_renders_first_palette() {
    let renderer = renderer();
    let fallback = renderer
        .render(RenderMode::Square, &card(1, "Hi", "", "unknown-id"))
        .expect("Failed to render");
    let first = renderer
        .render(RenderMode::Square, &card(1, "Hi", "", "gradient1"))
        .expect("Failed to render");
    assert_eq!(fallback.png(), first.png());

    let svg = renderer
        .render_svg(RenderMode::Square, &card(1, "Hi", "", "unknown-id"))
        .expect("Failed to render");
    assert!(svg.contains("- Anonymous"));
}

#[test]
fn test_document_background_is_black() {
    let result = renderer()
        .render(RenderMode::Document, &card(1, "Hi", "Mir", "gradient4"))
        .expect("Failed to render");
    assert_eq!(result.raster().pixel(1070, 900), Some([0, 0, 0, 255]));
}

#[test]
fn test_renders_are_byte_identical() {
    let renderer = renderer();
    let card = card(3, "Dil hi to hai\n\nna sang-o-khisht", "Ghalib", "gradient5");
    for mode in RenderMode::ALL {
        let first = renderer.render(mode, &card).expect("Failed to render");
        let second = renderer.render(mode, &card).expect("Failed to render");
        assert_eq!(first.png(), second.png(), "{mode}");
        assert_eq!(first.raster(), second.raster(), "{mode}");
    }
}

#[test]
fn test_any_field_change_changes_output() {
    let renderer = renderer();
    let base = card(3, "verse", "Mir", "gradient1");
    let base_svg = renderer.render_svg(RenderMode::Square, &base).unwrap();

    for changed in [
        card(3, "other verse", "Mir", "gradient1"),
        card(3, "verse", "Ghalib", "gradient1"),
        card(3, "verse", "Mir", "gradient2"),
    ] {
        let svg = renderer.render_svg(RenderMode::Square, &changed).unwrap();
        assert_ne!(svg, base_svg, "{changed:?}");
    }

    let document_svg = renderer.render_svg(RenderMode::Document, &base).unwrap();
    assert_ne!(document_svg, base_svg);

    let square = renderer.render(RenderMode::Square, &base).unwrap();
    for changed in [
        card(3, "other verse", "Mir", "gradient1"),
        card(3, "verse", "Ghalib", "gradient1"),
        card(3, "verse", "Mir", "gradient3"),
    ] {
        let png = renderer.render(RenderMode::Square, &changed).unwrap();
        assert_ne!(png.png(), square.png(), "{changed:?}");
    }
}

#[test]
fn test_verse_and_author_are_painted() {
    let renderer = renderer();
    for mode in RenderMode::ALL {
        let hi = renderer
            .render(mode, &card(4, "Hi", "Mir", "gradient1"))
            .unwrap();
        let bye = renderer
            .render(mode, &card(4, "Bye", "Ghalib", "gradient1"))
            .unwrap();
        assert_ne!(hi.raster(), bye.raster(), "{mode}");
    }
}

#[test]
fn test_control_characters_in_verse_still_render() {
    let renderer = renderer();
    let card = card(6, "dil\u{1}hai", "Mir", "gradient1");
    for mode in RenderMode::ALL {
        let result = renderer.render(mode, &card).expect("Failed to render");
        assert_eq!(result.png()[..8], PNG_SIGNATURE, "{mode}");
    }
    let svg = renderer.render_svg(RenderMode::Square, &card).unwrap();
    assert!(svg.contains("dilhai"));
}

#[test]
fn test_exporters_through_renderer() {
    let renderer = renderer();
    let card = card(9, "Hi", "", "gradient2");

    let svg = renderer
        .export(RenderMode::Square, &card, &SvgExporter::new())
        .unwrap();
    assert!(String::from_utf8(svg).unwrap().contains("</svg>"));

    let png = renderer
        .export(
            RenderMode::Document,
            &card,
            &PngExporter::new(renderer.rasterizer().clone()),
        )
        .unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);
}

#[test]
fn test_blank_text_is_rejected_before_rendering() {
    let err: ShayariError = CardData::new(CardId::new(5), " \n ", "Mir", "gradient1")
        .unwrap_err()
        .into();
    assert!(matches!(err, ShayariError::Validation(_)));
}

#[test]
fn test_invalid_accent_color_is_validation_error() {
    let config = AppConfig::new(
        StyleConfig::new("Arial", "definitely-not-a-color"),
        TextConfig::new(Measurement::Monospace, 0.6),
        FontConfig::new(Vec::new(), false),
    );
    let err = CardRenderer::new(config).unwrap_err();
    assert!(matches!(err, ShayariError::Validation(_)));
}
