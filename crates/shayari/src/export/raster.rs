//! Headless rasterisation with resvg.
//!
//! The scene is serialised to SVG, parsed by usvg against a font database
//! built from the same [`FontSources`] the text measure uses, and painted
//! into a [`Pixmap`] at scale 1.
//!
//! Every database also carries a bundled Inter face registered as the
//! generic serif and sans-serif family. usvg falls back to serif when no
//! requested family matches, so text is painted even on hosts with no fonts.

use std::{fmt, sync::Arc};

use log::{debug, error, warn};
use resvg::{
    tiny_skia::{Pixmap, Transform},
    usvg::{self, fontdb},
};

use shayari_core::draw::{FontSources, Scene};

use crate::export::{self, Exporter};

/// Inter Regular, SIL Open Font License 1.1 (see `assets/fonts/Inter-LICENSE`).
const FALLBACK_FONT: &[u8] = include_bytes!("../../assets/fonts/Inter-Regular.ttf");

/// A rendered image: premultiplied RGBA8 pixels, row-major.
#[derive(Clone, PartialEq)]
pub struct RasterBuffer {
    pixmap: Pixmap,
}

impl RasterBuffer {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the straight-alpha RGBA value at `(x, y)`, or `None` when the
    /// coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the flat index, so x past the edge wraps
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Encodes the image as lossless PNG.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Encode`] if the PNG encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, export::Error> {
        self.pixmap.encode_png().map_err(|err| {
            error!(err:err; "Failed to encode PNG");
            export::Error::Encode(err.to_string())
        })
    }
}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Paints scenes into pixel buffers.
///
/// Cloning is cheap; clones share one font database.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
    font_family: String,
}

impl Rasterizer {
    /// Creates a rasterizer that resolves fonts from `sources` and uses
    /// `font_family` for text whose family cannot be matched.
    pub fn new(sources: &FontSources, font_family: impl Into<String>) -> Self {
        let mut db = fontdb::Database::new();
        if sources.load_system_fonts() {
            db.load_system_fonts();
        }
        for dir in sources.dirs() {
            db.load_fonts_dir(dir);
        }
        load_fallback_font(&mut db);
        debug!(faces = db.len(); "Raster font database loaded");

        Self {
            fontdb: Arc::new(db),
            font_family: font_family.into(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Paints `scene` into a new buffer of exactly the scene's size.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Svg`] if the scene markup cannot be parsed and
    /// [`export::Error::SurfaceUnavailable`] if the buffer cannot be
    /// allocated (for instance a zero-sized scene).
    pub fn rasterize(&self, scene: &Scene) -> Result<RasterBuffer, export::Error> {
        let (width, height) = scene.size().to_pixels();
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            error!(width, height; "Failed to allocate drawing surface");
            export::Error::SurfaceUnavailable { width, height }
        })?;

        let markup = scene.to_svg().to_string();
        let mut options = usvg::Options::default();
        options.font_family = self.font_family.clone();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(&markup, &options).map_err(|err| {
            error!(err:err; "Failed to parse scene markup");
            export::Error::Svg(err.to_string())
        })?;

        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
        debug!(width, height; "Scene rasterized");

        Ok(RasterBuffer { pixmap })
    }
}

fn load_fallback_font(db: &mut fontdb::Database) {
    let ids = db.load_font_source(fontdb::Source::Binary(Arc::new(FALLBACK_FONT)));
    let family = ids
        .first()
        .and_then(|&id| db.face(id))
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone());

    match family {
        Some(family) => {
            debug!(family = family.as_str(); "Fallback font registered");
            db.set_serif_family(family.as_str());
            db.set_sans_serif_family(family);
        }
        None => warn!("Bundled fallback font could not be parsed"),
    }
}

impl fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .field("font_family", &self.font_family)
            .finish()
    }
}

/// Rasterizes scenes and encodes them as PNG.
#[derive(Debug, Clone)]
pub struct PngExporter {
    rasterizer: Rasterizer,
}

impl PngExporter {
    pub fn new(rasterizer: Rasterizer) -> Self {
        Self { rasterizer }
    }
}

impl Exporter for PngExporter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn export(&self, scene: &Scene) -> Result<Vec<u8>, export::Error> {
        self.rasterizer.rasterize(scene)?.encode_png()
    }
}
