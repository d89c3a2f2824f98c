//! Per-mode layout parameters.
//!
//! Both render modes run the same [`LayoutEngine`](super::LayoutEngine); a
//! [`LayoutSpec`] carries everything that differs between them: canvas size,
//! margins, alignment, blank-line handling, font and line-height rules,
//! vertical placement and the attribution treatment.

use shayari_core::{
    color::Color,
    draw::{FontStyle, FontWeight, TextBaseline, TextShadow},
    geometry::Size,
};

use crate::layout::BlankLinePolicy;

/// Horizontal alignment of body and attribution lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Centered on the canvas midline.
    Center,
    /// Flush left at the side margin.
    Start,
}

/// How the body font size is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyFontSize {
    /// From the verse length, see [`FontScalingPolicy`](super::FontScalingPolicy).
    Tiered,
    Fixed(f32),
}

/// Distance between consecutive body baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// A multiple of the body font size.
    Relative(f32),
    Fixed(f32),
}

/// Where the first body line goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalPlacement {
    /// Center the body block, but never start above `min_top`.
    ///
    /// Blocks taller than the canvas overflow downward.
    Centered { min_top: f32 },
    /// Start at a fixed y.
    Top(f32),
}

/// Size of the attribution line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributionSize {
    /// A fraction of the body font size.
    Relative(f32),
    Fixed(f32),
}

/// A hairline drawn between body and attribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorSpec {
    pub color: Color,
    /// Space between the separator and the attribution.
    pub gap_after: f32,
}

/// Placement and style of the `"- author"` line.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributionSpec {
    /// Space between the end of the body and the next element.
    pub gap: f32,
    pub separator: Option<SeparatorSpec>,
    pub size: AttributionSize,
    pub style: FontStyle,
    pub color: Color,
    pub baseline: TextBaseline,
    pub shadow: Option<TextShadow>,
}

/// Everything that distinguishes one layout mode from another.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub canvas: Size,
    pub side_margin: f32,
    pub alignment: HorizontalAlignment,
    pub blank_lines: BlankLinePolicy,
    pub font_family: String,
    pub body_size: BodyFontSize,
    pub body_weight: FontWeight,
    pub body_color: Color,
    pub body_baseline: TextBaseline,
    pub body_shadow: Option<TextShadow>,
    pub line_spacing: LineSpacing,
    pub vertical: VerticalPlacement,
    pub attribution: AttributionSpec,
}

/// Shadow under Square-mode text: 30% black, blur 15.
pub fn card_text_shadow() -> TextShadow {
    TextShadow::new(Color::black().with_alpha(0.3), 15.0)
}

/// Hairline color of the document chrome.
pub fn hairline_color() -> Color {
    Color::from_rgb8(0x1f, 0x29, 0x37)
}

impl LayoutSpec {
    /// The 1080×1080 social card: centered bold tiered text over a gradient.
    pub fn square(font_family: impl Into<String>) -> Self {
        Self {
            canvas: Size::new(1080.0, 1080.0),
            side_margin: 100.0,
            alignment: HorizontalAlignment::Center,
            blank_lines: BlankLinePolicy::Drop,
            font_family: font_family.into(),
            body_size: BodyFontSize::Tiered,
            body_weight: FontWeight::Bold,
            body_color: Color::white(),
            body_baseline: TextBaseline::Middle,
            body_shadow: Some(card_text_shadow()),
            line_spacing: LineSpacing::Relative(1.5),
            vertical: VerticalPlacement::Centered { min_top: 100.0 },
            attribution: AttributionSpec {
                gap: 40.0,
                separator: None,
                size: AttributionSize::Relative(0.6),
                style: FontStyle::Italic,
                color: Color::white(),
                baseline: TextBaseline::Middle,
                shadow: Some(card_text_shadow()),
            },
        }
    }

    /// The 1080×1725 notes document: flush-left fixed-size text under a toolbar.
    pub fn document(font_family: impl Into<String>) -> Self {
        Self {
            canvas: Size::new(1080.0, 1725.0),
            side_margin: 80.0,
            alignment: HorizontalAlignment::Start,
            blank_lines: BlankLinePolicy::Gap,
            font_family: font_family.into(),
            body_size: BodyFontSize::Fixed(42.0),
            body_weight: FontWeight::Normal,
            body_color: Color::white(),
            body_baseline: TextBaseline::Top,
            body_shadow: None,
            line_spacing: LineSpacing::Fixed(65.0),
            vertical: VerticalPlacement::Top(200.0),
            attribution: AttributionSpec {
                gap: 40.0,
                separator: Some(SeparatorSpec {
                    color: hairline_color(),
                    gap_after: 50.0,
                }),
                size: AttributionSize::Fixed(36.0),
                style: FontStyle::Italic,
                color: Color::from_rgb8(0x9c, 0xa3, 0xaf),
                baseline: TextBaseline::Top,
                shadow: None,
            },
        }
    }

    /// Maximum width of a body line.
    pub fn max_line_width(&self) -> f32 {
        self.canvas.width() - self.side_margin * 2.0
    }

    /// X coordinate body and attribution lines are anchored at.
    pub fn anchor_x(&self) -> f32 {
        match self.alignment {
            HorizontalAlignment::Center => self.canvas.width() / 2.0,
            HorizontalAlignment::Start => self.side_margin,
        }
    }
}
