//! Scene composition for each render mode.
//!
//! A composer paints a mode's backdrop (gradient card or notes chrome) and
//! then places the laid-out text on top. Both modes share the same
//! [`LayoutEngine`]; they differ only in their [`LayoutSpec`] and backdrop.
//!
//! - [`CardComposer`] - Square mode, 1080×1080
//! - [`NotesComposer`] - Document mode, 1080×1725

mod document;
mod gradient;
mod square;

pub use document::NotesComposer;
pub use gradient::GradientSynthesizer;
pub use square::CardComposer;

use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::Deserialize;

use shayari_core::{
    card::{CardData, CardId},
    color::Color,
    draw::{Scene, TextMeasure},
    geometry::Size,
};

use crate::layout::{LayoutEngine, LayoutSpec};

/// Which kind of image to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// A 1080×1080 social card.
    #[default]
    Square,
    /// A 1080×1725 notes-app screenshot.
    Document,
}

impl RenderMode {
    pub const ALL: [RenderMode; 2] = [Self::Square, Self::Document];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Document => "document",
        }
    }

    /// Output dimensions in pixels.
    pub fn canvas_size(self) -> Size {
        match self {
            Self::Square => Size::new(1080.0, 1080.0),
            Self::Document => Size::new(1080.0, 1725.0),
        }
    }

    /// File name offered for the PNG of `id` in this mode.
    ///
    /// ```
    /// # use shayari::RenderMode;
    /// # use shayari::card::CardId;
    /// assert_eq!(RenderMode::Square.suggested_filename(CardId::new(7)), "shayari-7.png");
    /// assert_eq!(
    ///     RenderMode::Document.suggested_filename(CardId::new(7)),
    ///     "shayari-screenshot-7.png"
    /// );
    /// ```
    pub fn suggested_filename(self, id: CardId) -> String {
        match self {
            Self::Square => format!("shayari-{id}.png"),
            Self::Document => format!("shayari-screenshot-{id}.png"),
        }
    }

    /// Builds the composer for this mode.
    pub fn composer(self, font_family: &str, accent: Color) -> Box<dyn Composer> {
        match self {
            Self::Square => Box::new(CardComposer::new(font_family)),
            Self::Document => Box::new(NotesComposer::new(font_family, accent)),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Self::Square),
            "document" => Ok(Self::Document),
            _ => Err(format!(
                "unknown render mode `{s}`, valid values: square, document"
            )),
        }
    }
}

/// Turns a card into a [`Scene`] for one render mode.
pub trait Composer: fmt::Debug + Send + Sync {
    /// The layout parameters of this mode.
    fn layout_spec(&self) -> &LayoutSpec;

    /// Paints everything that sits below the card text.
    fn paint_backdrop(&self, scene: &mut Scene, card: &CardData);

    /// Composes the full scene: backdrop first, then body and attribution.
    fn compose(&self, card: &CardData, measure: &dyn TextMeasure) -> Scene {
        let spec = self.layout_spec();
        let mut scene = Scene::new(spec.canvas);
        self.paint_backdrop(&mut scene, card);

        let layout = LayoutEngine::new(spec, measure).layout(card);
        for command in layout.to_commands() {
            scene.push(command);
        }

        debug!(
            card_id = card.id().get(),
            commands = scene.commands().len();
            "Scene composed"
        );
        trace!(scene:?; "Composed scene");
        scene
    }
}
