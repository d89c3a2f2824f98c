//! Square mode: the 1080×1080 social card.

use log::debug;

use shayari_core::{card::CardData, draw::Scene, palette::PaletteStore};

use crate::{
    compose::{Composer, GradientSynthesizer},
    layout::LayoutSpec,
};

/// Centered verse over the card's palette gradient.
#[derive(Debug, Clone)]
pub struct CardComposer {
    spec: LayoutSpec,
}

impl CardComposer {
    pub fn new(font_family: &str) -> Self {
        Self {
            spec: LayoutSpec::square(font_family),
        }
    }
}

impl Composer for CardComposer {
    fn layout_spec(&self) -> &LayoutSpec {
        &self.spec
    }

    fn paint_backdrop(&self, scene: &mut Scene, card: &CardData) {
        let palette = PaletteStore::lookup(card.background());
        debug!(card_id = card.id().get(), palette = palette.id().as_str(); "Painting card gradient");
        GradientSynthesizer::fill(scene, palette);
    }
}
