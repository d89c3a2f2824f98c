//! Text styling and rendering for verses, attributions and labels.
//!
//! - [`FontSpec`] - Family, pixel size, weight and style of a run of text
//! - [`TextDefinition`] - Reusable style: font, color, anchor, baseline and shadow
//! - [`Text`] - A renderable single line combining content with a [`TextDefinition`]
//!
//! Text never wraps here. Line breaking happens before drawing, so every
//! [`Text`] becomes exactly one SVG `<text>` element.
//!
//! # Quick Start
//!
//! ```
//! # use shayari_core::draw::{FontSpec, FontWeight, Text, TextDefinition, TextAnchor};
//! # use shayari_core::color::Color;
//! let font = FontSpec::new("Arial", 48.0).with_weight(FontWeight::Bold);
//! let mut style = TextDefinition::new(font, Color::white());
//! style.set_anchor(TextAnchor::Middle);
//!
//! let text = Text::new(style, "dil hi to hai");
//! assert_eq!(text.content(), "dil hi to hai");
//! ```

use std::{borrow::Cow, fmt};

use svg::{
    Node,
    node::{Text as SvgText, element as svg_element},
};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Stroke thickness of glyphs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Upright or slanted glyphs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Font selection for a run of text.
///
/// Sizes are in output pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    family: String,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}px {}",
            self.style.to_svg_value(),
            self.weight.to_svg_value(),
            self.size,
            self.family
        )
    }
}

/// Horizontal alignment of a line relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical alignment of a line relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// The anchor is the top edge of the line box.
    Top,
    /// The anchor is the vertical middle of the line box.
    #[default]
    Middle,
}

impl TextBaseline {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Top => "text-before-edge",
            Self::Middle => "central",
        }
    }
}

/// A soft drop shadow centered under the glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShadow {
    color: Color,
    blur: f32,
}

impl TextShadow {
    /// Creates a shadow with zero offset and the given blur radius.
    pub fn new(color: Color, blur: f32) -> Self {
        Self { color, blur }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blur(&self) -> f32 {
        self.blur
    }

    /// Deterministic filter id derived from the shadow parameters.
    pub fn filter_id(&self) -> String {
        format!(
            "shadow_b{}_{}",
            (self.blur * 10.0).round() as i64,
            self.color.to_id_safe_string()
        )
    }

    fn to_svg(&self) -> svg_element::Filter {
        let mut drop_shadow = svg_element::Element::new("feDropShadow");
        drop_shadow.assign("dx", 0);
        drop_shadow.assign("dy", 0);
        // Blur radius maps to a gaussian standard deviation of half its size
        drop_shadow.assign("stdDeviation", self.blur / 2.0);
        drop_shadow.assign("flood-color", self.color.to_string());
        drop_shadow.assign("flood-opacity", self.color.alpha());

        svg_element::Filter::new()
            .set("id", self.filter_id())
            .set("x", "-50%")
            .set("y", "-50%")
            .set("width", "200%")
            .set("height", "200%")
            .add(drop_shadow)
    }
}

/// Defines the visual style of a line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font: FontSpec,
    color: Color,
    anchor: TextAnchor,
    baseline: TextBaseline,
    shadow: Option<TextShadow>,
}

impl TextDefinition {
    /// Creates a start-anchored, middle-baseline style without shadow.
    pub fn new(font: FontSpec, color: Color) -> Self {
        Self {
            font,
            color,
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
            shadow: None,
        }
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn set_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    pub fn set_shadow(&mut self, shadow: Option<TextShadow>) {
        self.shadow = shadow;
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn baseline(&self) -> TextBaseline {
        self.baseline
    }

    pub fn shadow(&self) -> Option<&TextShadow> {
        self.shadow.as_ref()
    }
}

/// A single line of text with its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
}

impl Text {
    pub fn new(definition: TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = &self.definition;
        let font = definition.font();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", definition.anchor().to_svg_value())
            .set("dominant-baseline", definition.baseline().to_svg_value())
            .set("font-family", font.family())
            .set("font-size", font.size())
            .set("font-weight", font.weight().to_svg_value())
            .set("font-style", font.style().to_svg_value())
            .set("fill", definition.color().to_string())
            .set("fill-opacity", definition.color().alpha())
            .set("xml:space", "preserve");

        if let Some(shadow) = definition.shadow() {
            let id = shadow.filter_id();
            rendered_text = rendered_text.set("filter", format!("url(#{id})"));
            output.add_definition(id, Box::new(shadow.to_svg()));
        }

        rendered_text = rendered_text.add(SvgText::new(xml_chars(&self.content)));
        output.add_to_layer(layer, Box::new(rendered_text));
        output
    }
}

/// Drops characters XML 1.0 forbids in character data, such as C0 controls.
fn xml_chars(content: &str) -> Cow<'_, str> {
    if content.chars().all(is_xml_char) {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(content.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(text: &Text) -> String {
        text.render_to_layers(Point::new(540.0, 300.0), RenderLayer::Text)
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_font_spec_builders() {
        let font = FontSpec::new("Arial", 36.0)
            .with_weight(FontWeight::Bold)
            .with_style(FontStyle::Italic)
            .with_size(28.0);
        assert_eq!(font.family(), "Arial");
        assert_eq!(font.size(), 28.0);
        assert_eq!(font.weight(), FontWeight::Bold);
        assert_eq!(font.style(), FontStyle::Italic);
        assert_eq!(font.to_string(), "italic bold 28px Arial");
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new(FontSpec::new("Arial", 12.0), Color::white());
        assert_eq!(def.anchor(), TextAnchor::Start);
        assert_eq!(def.baseline(), TextBaseline::Middle);
        assert!(def.shadow().is_none());
    }

    #[test]
    fn test_text_renders_font_attributes() {
        let font = FontSpec::new("Arial", 48.0).with_weight(FontWeight::Bold);
        let mut def = TextDefinition::new(font, Color::white());
        def.set_anchor(TextAnchor::Middle);
        let rendered = render_to_string(&Text::new(def, "Hello"));

        assert!(rendered.contains("x=\"540\""));
        assert!(rendered.contains("y=\"300\""));
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(rendered.contains("dominant-baseline=\"central\""));
        assert!(rendered.contains("font-size=\"48\""));
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("fill=\"#ffffff\""));
        assert!(rendered.contains("Hello"));
        assert!(!rendered.contains("filter"));
    }

    #[test]
    fn test_control_characters_are_not_emitted() {
        let def = TextDefinition::new(FontSpec::new("Arial", 36.0), Color::white());
        let text = Text::new(def, "dil\u{1}hai\u{FFFF} & <sang>\u{7}");
        let rendered = render_to_string(&text);

        assert!(rendered.contains("dilhai &amp; &lt;sang&gt;"));
        assert!(!rendered.contains('\u{1}'));
        assert!(!rendered.contains('\u{7}'));
        assert!(!rendered.contains('\u{FFFF}'));
        // The stored content is untouched
        assert_eq!(text.content(), "dil\u{1}hai\u{FFFF} & <sang>\u{7}");
    }

    #[test]
    fn test_xml_chars_borrows_clean_text() {
        assert!(matches!(xml_chars("dil hi to hai\n"), Cow::Borrowed(_)));
        assert_eq!(xml_chars("a\u{0}b\tc"), "ab\tc");
    }

    #[test]
    fn test_top_baseline_value() {
        let mut def = TextDefinition::new(FontSpec::new("Arial", 36.0), Color::white());
        def.set_baseline(TextBaseline::Top);
        let rendered = render_to_string(&Text::new(def, "- Mir"));
        assert!(rendered.contains("dominant-baseline=\"text-before-edge\""));
    }

    #[test]
    fn test_shadow_adds_filter_definition() {
        let shadow = TextShadow::new(Color::black().with_alpha(0.3), 15.0);
        let mut def = TextDefinition::new(FontSpec::new("Arial", 48.0), Color::white());
        def.set_shadow(Some(shadow));

        let output = Text::new(def, "Hi").render_to_layers(Point::default(), RenderLayer::Text);
        assert_eq!(output.definition_count(), 1);

        let rendered: String = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert!(rendered.contains("feDropShadow"));
        assert!(rendered.contains("stdDeviation=\"7.5\""));
        assert!(rendered.contains(&format!("filter=\"url(#{})\"", shadow.filter_id())));
    }

    #[test]
    fn test_shadow_filter_id_is_deterministic() {
        let a = TextShadow::new(Color::black().with_alpha(0.3), 15.0);
        let b = TextShadow::new(Color::black().with_alpha(0.3), 15.0);
        let c = TextShadow::new(Color::black().with_alpha(0.3), 4.0);
        assert_eq!(a.filter_id(), b.filter_id());
        assert_ne!(a.filter_id(), c.filter_id());
    }

    #[test]
    fn test_text_content_is_escaped() {
        let def = TextDefinition::new(FontSpec::new("Arial", 12.0), Color::white());
        let rendered = render_to_string(&Text::new(def, "<b> & co"));
        assert!(rendered.contains("&lt;b&gt; &amp; co"));
    }
}
