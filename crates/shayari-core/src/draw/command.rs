//! Draw commands and scenes.
//!
//! Composers describe a card as a [`Scene`]: a canvas size plus an ordered
//! list of [`DrawCommand`]s. A scene is pure data; turning it into SVG or
//! pixels is the job of the export stage.

use svg::Document;

use crate::{
    draw::{Drawable, LayeredOutput, Primitive, RenderLayer},
    geometry::{Point, Size},
};

/// One primitive placed at a position on a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    layer: RenderLayer,
    position: Point,
    primitive: Primitive,
}

impl DrawCommand {
    pub fn new(layer: RenderLayer, position: Point, primitive: impl Into<Primitive>) -> Self {
        Self {
            layer,
            position,
            primitive: primitive.into(),
        }
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }
}

/// A fully composed canvas, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Shorthand for pushing a [`DrawCommand`].
    pub fn draw(&mut self, layer: RenderLayer, position: Point, primitive: impl Into<Primitive>) {
        self.push(DrawCommand::new(layer, position, primitive));
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterates over the text content of every text command, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .filter_map(|command| command.primitive().as_text())
            .map(|text| text.content())
    }

    /// Renders the scene into a standalone SVG document.
    ///
    /// The document's user space matches the canvas one to one, so a
    /// rasterizer at scale 1 produces exactly `size` pixels.
    pub fn to_svg(&self) -> Document {
        let output = self
            .commands
            .iter()
            .fold(LayeredOutput::new(), |mut output, command| {
                output.merge(
                    command
                        .primitive()
                        .render_to_layers(command.position(), command.layer()),
                );
                output
            });

        let (width, height) = (self.size.width(), self.size.height());
        output.render().into_iter().fold(
            Document::new()
                .set("width", width)
                .set("height", height)
                .set("viewBox", (0.0, 0.0, width, height)),
            |document, node| document.add(node),
        )
    }
}
