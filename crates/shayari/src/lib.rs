//! Shayari - composes verse, author and background into card images.
//!
//! Layout, composition and headless rasterisation for two render modes: a
//! square gradient card and a tall notes-app screenshot. Rendering is a pure
//! function of the card, the mode, the fixed palette table and the injected
//! text measure.

pub mod compose;
pub mod config;
pub mod export;
pub mod layout;
pub mod store;

mod error;

pub use shayari_core::{card, color, draw, geometry, palette};

pub use compose::RenderMode;
pub use error::ShayariError;

use std::sync::Arc;

use log::{debug, info};

use card::CardData;
use color::Color;
use config::AppConfig;
use draw::{Scene, TextMeasure};
use export::{
    Exporter,
    raster::{RasterBuffer, Rasterizer},
    svg::SvgExporter,
};

/// A rendered card: the pixels, their PNG encoding and a file name.
#[derive(Debug, Clone)]
pub struct RenderResult {
    raster: RasterBuffer,
    png: Vec<u8>,
    suggested_filename: String,
}

impl RenderResult {
    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    /// The PNG-encoded image.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn suggested_filename(&self) -> &str {
        &self.suggested_filename
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}

/// Entry point for rendering cards.
///
/// A renderer holds the text measure and the raster font database; it is
/// cheap to share across threads and every render is independent.
///
/// # Examples
///
/// ```rust,no_run
/// use shayari::{CardRenderer, RenderMode, card::{CardData, CardId}, config::AppConfig};
///
/// let renderer = CardRenderer::new(AppConfig::default())
///     .expect("Failed to build renderer");
/// let card = CardData::new(CardId::new(1), "Hazaron khwahishen aisi", "Ghalib", "gradient5")
///     .expect("Card text is not blank");
///
/// let result = renderer.render(RenderMode::Square, &card)
///     .expect("Failed to render card");
/// std::fs::write(result.suggested_filename(), result.png()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CardRenderer {
    measure: Arc<dyn TextMeasure>,
    rasterizer: Rasterizer,
    font_family: String,
    accent: Color,
}

impl CardRenderer {
    /// Creates a renderer from `config`, loading the configured fonts.
    ///
    /// # Errors
    ///
    /// Returns [`ShayariError::Validation`] if the configured accent colour
    /// is invalid.
    pub fn new(config: AppConfig) -> Result<Self, ShayariError> {
        let accent = config
            .style()
            .accent_color()
            .map_err(ShayariError::Validation)?;
        let font_family = config.style().font_family().to_string();
        let sources = config.fonts().sources();

        info!(
            font_family,
            measurement:? = config.text().measurement();
            "Building card renderer"
        );

        Ok(Self {
            measure: config.text().build_measure(&sources),
            rasterizer: Rasterizer::new(&sources, font_family.as_str()),
            font_family,
            accent,
        })
    }

    /// Replaces the text measure used for line breaking.
    pub fn with_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self
    }

    /// Lays out and composes `card` without rasterising it.
    pub fn compose(&self, mode: RenderMode, card: &CardData) -> Scene {
        info!(card_id = card.id().get(), mode:% = mode; "Composing card");
        mode.composer(&self.font_family, self.accent)
            .compose(card, self.measure.as_ref())
    }

    /// Renders `card` as SVG markup.
    pub fn render_svg(&self, mode: RenderMode, card: &CardData) -> Result<String, ShayariError> {
        let scene = self.compose(mode, card);
        Ok(SvgExporter::new().to_markup(&scene))
    }

    /// Renders `card` as an image.
    ///
    /// # Errors
    ///
    /// Returns [`ShayariError::SurfaceUnavailable`] if no pixel buffer could
    /// be allocated and [`ShayariError::EncodeFailure`] if rasterising or PNG
    /// encoding fails. Nothing is returned on failure.
    pub fn render(&self, mode: RenderMode, card: &CardData) -> Result<RenderResult, ShayariError> {
        let scene = self.compose(mode, card);
        let raster = self.rasterizer.rasterize(&scene)?;
        let png = raster.encode_png()?;
        let suggested_filename = mode.suggested_filename(card.id());

        info!(
            card_id = card.id().get(),
            bytes = png.len(),
            file_name = suggested_filename;
            "Card rendered"
        );
        Ok(RenderResult {
            raster,
            png,
            suggested_filename,
        })
    }

    /// Renders `card` with an arbitrary exporter.
    pub fn export(
        &self,
        mode: RenderMode,
        card: &CardData,
        exporter: &dyn Exporter,
    ) -> Result<Vec<u8>, ShayariError> {
        let scene = self.compose(mode, card);
        let bytes = exporter.export(&scene)?;
        debug!(extension = exporter.extension(), bytes = bytes.len(); "Scene exported");
        Ok(bytes)
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }
}
