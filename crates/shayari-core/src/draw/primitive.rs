//! Geometric primitives: rectangles, circles, ellipses and polylines.
//!
//! Every primitive is positioned by the point passed to
//! [`Drawable::render_to_layers`]. Rectangles are anchored at their top-left
//! corner, circles and ellipses at their center, and polylines interpret their
//! points as offsets from the position.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, Fill, Icon, LayeredOutput, RenderLayer, StrokeDefinition, Text},
    geometry::{Point, Size},
};

fn resolve_fill(fill: Option<&Fill>, output: &mut LayeredOutput) -> (String, f32) {
    match fill {
        Some(fill) => fill.resolve(output),
        None => (String::from("none"), 1.0),
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    size: Size,
    fill: Option<Fill>,
    stroke: Option<StrokeDefinition>,
}

impl Rect {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }
}

impl Drawable for Rect {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let (fill, fill_opacity) = resolve_fill(self.fill.as_ref(), &mut output);

        let mut rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", fill)
            .set("fill-opacity", fill_opacity);
        if let Some(stroke) = &self.stroke {
            rect = apply_stroke!(rect, stroke);
        }

        output.add_to_layer(layer, Box::new(rect));
        output
    }
}

/// A circle anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f32,
    fill: Option<Fill>,
    stroke: Option<StrokeDefinition>,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let (fill, fill_opacity) = resolve_fill(self.fill.as_ref(), &mut output);

        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius)
            .set("fill", fill)
            .set("fill-opacity", fill_opacity);
        if let Some(stroke) = &self.stroke {
            circle = apply_stroke!(circle, stroke);
        }

        output.add_to_layer(layer, Box::new(circle));
        output
    }
}

/// An axis-aligned ellipse anchored at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    rx: f32,
    ry: f32,
    fill: Option<Fill>,
    stroke: Option<StrokeDefinition>,
}

impl Ellipse {
    pub fn new(rx: f32, ry: f32) -> Self {
        Self {
            rx,
            ry,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

impl Drawable for Ellipse {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let (fill, fill_opacity) = resolve_fill(self.fill.as_ref(), &mut output);

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", self.rx)
            .set("ry", self.ry)
            .set("fill", fill)
            .set("fill-opacity", fill_opacity);
        if let Some(stroke) = &self.stroke {
            ellipse = apply_stroke!(ellipse, stroke);
        }

        output.add_to_layer(layer, Box::new(ellipse));
        output
    }
}

/// A stroked chain of line segments, optionally closed into a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
    stroke: StrokeDefinition,
}

impl Polyline {
    /// An open chain through `points`.
    pub fn new(points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            points,
            closed: false,
            stroke,
        }
    }

    /// A single straight segment.
    pub fn line(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self::new(vec![from, to], stroke)
    }

    /// A closed outline through `points`.
    pub fn closed(points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            points,
            closed: true,
            stroke,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn points_attr(&self, position: Point) -> String {
        self.points
            .iter()
            .map(|point| {
                let point = position.add_point(*point);
                format!("{},{}", point.x(), point.y())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Drawable for Polyline {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let points = self.points_attr(position);

        if self.closed {
            let polygon = svg_element::Polygon::new()
                .set("points", points)
                .set("fill", "none");
            output.add_to_layer(layer, Box::new(apply_stroke!(polygon, &self.stroke)));
        } else {
            let polyline = svg_element::Polyline::new()
                .set("points", points)
                .set("fill", "none");
            output.add_to_layer(layer, Box::new(apply_stroke!(polyline, &self.stroke)));
        }
        output
    }
}

/// Anything a composer can place on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Polyline(Polyline),
    Icon(Icon),
    Text(Text),
}

impl Primitive {
    /// Returns the text content if this is a text primitive.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Drawable for Primitive {
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput {
        match self {
            Self::Rect(rect) => rect.render_to_layers(position, layer),
            Self::Circle(circle) => circle.render_to_layers(position, layer),
            Self::Ellipse(ellipse) => ellipse.render_to_layers(position, layer),
            Self::Polyline(polyline) => polyline.render_to_layers(position, layer),
            Self::Icon(icon) => icon.render_to_layers(position, layer),
            Self::Text(text) => text.render_to_layers(position, layer),
        }
    }
}

impl From<Rect> for Primitive {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Ellipse> for Primitive {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<Polyline> for Primitive {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Icon> for Primitive {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

impl From<Text> for Primitive {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
