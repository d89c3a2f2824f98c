//! Drawable components for card rendering.
//!
//! This module provides the primitives composers place on a canvas (shapes,
//! icons and text), the paints they use (fills and strokes), and the
//! [`Scene`] that collects them. All primitives implement the [`Drawable`]
//! trait, which renders them to layered SVG output.
//!
//! # Layer-Based Rendering
//!
//! Drawables render onto the [`RenderLayer`] named by their [`DrawCommand`];
//! layers are ordered bottom to top during final SVG generation.

mod command;
mod fill;
mod icon;
mod layer;
mod measure;
mod primitive;
mod stroke;
mod text;

pub use command::{DrawCommand, Scene};
pub use fill::{Fill, GradientStop, LinearGradient};
pub use icon::{Icon, IconKind};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use measure::{FontSources, MonospaceTextMeasure, ShapedTextMeasure, TextMeasure};
pub use primitive::{Circle, Ellipse, Polyline, Primitive, Rect};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use text::{
    FontSpec, FontStyle, FontWeight, Text, TextAnchor, TextBaseline, TextDefinition, TextShadow,
};

use crate::geometry::Point;

/// Trait for card elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable at `position` onto `layer`.
    ///
    /// Shared definitions the drawable depends on (gradients, filters) are
    /// registered in the returned [`LayeredOutput`] alongside its nodes.
    fn render_to_layers(&self, position: Point, layer: RenderLayer) -> LayeredOutput;
}
