use log::debug;

use shayari_core::draw::Scene;

use crate::export::{self, Exporter};

/// Serialises a scene as standalone SVG markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the scene as an SVG string.
    pub fn to_markup(&self, scene: &Scene) -> String {
        let markup = scene.to_svg().to_string();
        debug!(bytes = markup.len(); "Scene serialised to SVG");
        markup
    }
}

impl Exporter for SvgExporter {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn export(&self, scene: &Scene) -> Result<Vec<u8>, export::Error> {
        Ok(self.to_markup(scene).into_bytes())
    }
}
