//! Positions a card's verse and attribution on the canvas.

use log::debug;

use shayari_core::{
    card::CardData,
    draw::{
        DrawCommand, FontSpec, Polyline, RenderLayer, StrokeDefinition, Text, TextAnchor,
        TextDefinition, TextMeasure,
    },
    geometry::Point,
};

use crate::layout::{
    AttributionSize, BodyFontSize, FontScalingPolicy, HorizontalAlignment, LayoutSpec,
    LineSpacing, TextLayoutEngine, VerticalPlacement,
};

/// A line of text with its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    position: Point,
    text: Text,
}

impl PositionedLine {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    fn to_command(&self) -> DrawCommand {
        DrawCommand::new(RenderLayer::Text, self.position, self.text.clone())
    }
}

/// A horizontal hairline between body and attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Separator {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Separator {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

/// The result of laying out one card.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    font_size: f32,
    line_height: f32,
    start_y: f32,
    body: Vec<PositionedLine>,
    separator: Option<Separator>,
    attribution: PositionedLine,
}

impl TextLayout {
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Y of the first body line, gaps included.
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Painted body lines; blank gaps are not included.
    pub fn body(&self) -> &[PositionedLine] {
        &self.body
    }

    pub fn separator(&self) -> Option<&Separator> {
        self.separator.as_ref()
    }

    pub fn attribution(&self) -> &PositionedLine {
        &self.attribution
    }

    /// Draw commands painting this layout, body first.
    pub fn to_commands(&self) -> Vec<DrawCommand> {
        let mut commands: Vec<DrawCommand> =
            self.body.iter().map(PositionedLine::to_command).collect();
        if let Some(separator) = &self.separator {
            let line = Polyline::line(
                Point::default(),
                Point::new(separator.end.x() - separator.start.x(), 0.0),
                separator.stroke.clone(),
            );
            commands.push(DrawCommand::new(RenderLayer::Chrome, separator.start, line));
        }
        commands.push(self.attribution.to_command());
        commands
    }
}

/// Lays out verse and attribution according to a [`LayoutSpec`].
#[derive(Debug)]
pub struct LayoutEngine<'a> {
    spec: &'a LayoutSpec,
    measure: &'a dyn TextMeasure,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(spec: &'a LayoutSpec, measure: &'a dyn TextMeasure) -> Self {
        Self { spec, measure }
    }

    fn body_font(&self, card: &CardData) -> FontSpec {
        let size = match self.spec.body_size {
            BodyFontSize::Tiered => FontScalingPolicy::tier_for_text(card.text()).px(),
            BodyFontSize::Fixed(size) => size,
        };
        FontSpec::new(self.spec.font_family.as_str(), size).with_weight(self.spec.body_weight)
    }

    fn anchor(&self) -> TextAnchor {
        match self.spec.alignment {
            HorizontalAlignment::Center => TextAnchor::Middle,
            HorizontalAlignment::Start => TextAnchor::Start,
        }
    }

    pub fn layout(&self, card: &CardData) -> TextLayout {
        let spec = self.spec;
        let font = self.body_font(card);
        let line_height = match spec.line_spacing {
            LineSpacing::Relative(factor) => font.size() * factor,
            LineSpacing::Fixed(height) => height,
        };

        let wrapped = TextLayoutEngine::new(spec.blank_lines).wrap(
            card.text(),
            spec.max_line_width(),
            |candidate| self.measure.measure(candidate, &font),
        );

        let start_y = match spec.vertical {
            VerticalPlacement::Centered { min_top } => {
                // One line per non-blank paragraph; wrapped continuations hang below
                let paragraphs = card
                    .text()
                    .split('\n')
                    .filter(|paragraph| !paragraph.trim().is_empty())
                    .count();
                let block_height = paragraphs as f32 * line_height;
                ((spec.canvas.height() - block_height) / 2.0).max(min_top)
            }
            VerticalPlacement::Top(y) => y,
        };
        debug!(
            card_id = card.id().get(),
            font_size = font.size(),
            lines = wrapped.len(),
            start_y;
            "Body laid out"
        );

        let mut body_style = TextDefinition::new(font.clone(), spec.body_color);
        body_style.set_anchor(self.anchor());
        body_style.set_baseline(spec.body_baseline);
        body_style.set_shadow(spec.body_shadow);

        let x = spec.anchor_x();
        let mut y = start_y;
        let mut body = Vec::with_capacity(wrapped.len());
        for line in wrapped {
            if !line.is_blank() {
                body.push(PositionedLine {
                    position: Point::new(x, y),
                    text: Text::new(body_style.clone(), line.text()),
                });
            }
            y += line_height;
        }

        let attribution_spec = &spec.attribution;
        y += attribution_spec.gap;

        let separator = attribution_spec.separator.map(|separator_spec| {
            let separator = Separator {
                start: Point::new(spec.side_margin, y),
                end: Point::new(spec.canvas.width() - spec.side_margin, y),
                stroke: StrokeDefinition::new(separator_spec.color, 1.0),
            };
            y += separator_spec.gap_after;
            separator
        });

        let attribution_size = match attribution_spec.size {
            AttributionSize::Relative(factor) => font.size() * factor,
            AttributionSize::Fixed(size) => size,
        };
        let attribution_font = FontSpec::new(spec.font_family.as_str(), attribution_size)
            .with_style(attribution_spec.style);
        let mut attribution_style = TextDefinition::new(attribution_font, attribution_spec.color);
        attribution_style.set_anchor(self.anchor());
        attribution_style.set_baseline(attribution_spec.baseline);
        attribution_style.set_shadow(attribution_spec.shadow);

        TextLayout {
            font_size: font.size(),
            line_height,
            start_y,
            body,
            separator,
            attribution: PositionedLine {
                position: Point::new(x, y),
                text: Text::new(attribution_style, card.attribution()),
            },
        }
    }
}
