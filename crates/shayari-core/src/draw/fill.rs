//! Fill paints: solid colors and linear gradients.

use svg::node::element as svg_element;

use crate::{color::Color, draw::LayeredOutput, geometry::Point};

/// One color stop of a [`LinearGradient`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    offset: f32,
    color: Color,
}

impl GradientStop {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A linear gradient between two points in canvas coordinates.
///
/// # Examples
///
/// ```
/// # use shayari_core::draw::LinearGradient;
/// # use shayari_core::color::Color;
/// # use shayari_core::geometry::Point;
/// let gradient = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1080.0, 1080.0))
///     .with_stop(0.0, Color::from_rgb8(0x93, 0x33, 0xea))
///     .with_stop(0.5, Color::from_rgb8(0xdb, 0x27, 0x77))
///     .with_stop(1.0, Color::from_rgb8(0xdc, 0x26, 0x26));
/// assert_eq!(gradient.stops().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    start: Point,
    end: Point,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Appends a stop; `offset` is clamped to `0.0..=1.0`.
    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Deterministic definition id derived from geometry and stops.
    pub fn id(&self) -> String {
        let mut id = format!(
            "lg_{}_{}_{}_{}",
            self.start.x().round(),
            self.start.y().round(),
            self.end.x().round(),
            self.end.y().round()
        );
        for stop in &self.stops {
            id.push_str(&format!(
                "_{}_{}",
                (stop.offset * 100.0).round(),
                stop.color.to_id_safe_string()
            ));
        }
        id.replace('-', "m")
    }

    fn to_svg(&self) -> svg_element::LinearGradient {
        self.stops.iter().fold(
            svg_element::LinearGradient::new()
                .set("id", self.id())
                .set("gradientUnits", "userSpaceOnUse")
                .set("x1", self.start.x())
                .set("y1", self.start.y())
                .set("x2", self.end.x())
                .set("y2", self.end.y()),
            |gradient, stop| {
                gradient.add(
                    svg_element::Stop::new()
                        .set("offset", stop.offset)
                        .set("stop-color", stop.color.to_string())
                        .set("stop-opacity", stop.color.alpha()),
                )
            },
        )
    }
}

/// How the interior of a shape is painted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Fill {
    /// Resolves this fill to SVG `fill` and `fill-opacity` values.
    ///
    /// Gradients are registered as a shared definition in `output` and
    /// referenced by URL.
    pub fn resolve(&self, output: &mut LayeredOutput) -> (String, f32) {
        match self {
            Self::Solid(color) => (color.to_string(), color.alpha()),
            Self::LinearGradient(gradient) => {
                let id = gradient.id();
                output.add_definition(id.clone(), Box::new(gradient.to_svg()));
                (format!("url(#{id})"), 1.0)
            }
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Fill {
    fn from(gradient: LinearGradient) -> Self {
        Self::LinearGradient(gradient)
    }
}
