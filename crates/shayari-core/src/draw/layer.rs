//! Layer-based rendering system for SVG output.
//!
//! Draw commands name the [`RenderLayer`] they paint on; [`LayeredOutput`]
//! collects the resulting SVG nodes and emits them bottom to top, so a card's
//! gradient always sits under its overlay, decorations and text regardless of
//! the order in which the composer produced them.
//!
//! Shared definitions (gradients, filters) are registered once by id and
//! emitted in a single `<defs>` block ahead of the layer groups.
//!
//! # Example
//!
//! ```
//! # use shayari_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let text = svg::node::element::Text::new("Hello");
//! output.add_to_layer(RenderLayer::Text, Box::new(text));
//!
//! let bg = Rectangle::new().set("fill", "white");
//! output.add_to_layer(RenderLayer::Background, Box::new(bg));
//!
//! // Background group first, then Text
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::collections::BTreeMap;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fills - renders first
    Background,
    /// Translucent washes and decorative accents over the background
    Overlay,
    /// Toolbars, hairlines and other document chrome
    Chrome,
    /// Vector icon glyphs
    Icon,
    /// Verse, attribution and labels
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Overlay => "overlay",
            Self::Chrome => "chrome",
            Self::Icon => "icon",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer, plus shared definitions.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
    definitions: BTreeMap<String, SvgNode>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Registers a shared definition under `id`.
    ///
    /// The first definition registered for an id wins; ids are derived from
    /// the definition's parameters, so later registrations are identical.
    pub fn add_definition(&mut self, id: impl Into<String>, node: SvgNode) {
        self.definitions.entry(id.into()).or_insert(node);
    }

    /// Merges all layers and definitions from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
        for (id, node) in other.definitions {
            self.definitions.entry(id).or_insert(node);
        }
    }

    /// Returns `true` if there are no nodes in any layer and no definitions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.definitions.is_empty()
    }

    /// Returns the number of registered definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// A `<defs>` element holding every definition comes first when any
    /// definition was registered. Each non-empty layer then becomes a `<g>`
    /// element with a `data-layer` attribute, bottom layer first.
    pub fn render(mut self) -> Vec<SvgNode> {
        let mut result = Vec::new();

        if !self.definitions.is_empty() {
            let defs = self
                .definitions
                .into_values()
                .fold(svg_element::Definitions::new(), |defs, node| defs.add(node));
            result.push(Box::new(defs) as SvgNode);
        }

        if self.items.is_empty() {
            return result;
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
