//! Text width measurement.
//!
//! Line breaking needs to know how wide a candidate line would be when
//! painted. [`TextMeasure`] is the seam: [`ShapedTextMeasure`] shapes text
//! against real fonts with cosmic-text, [`MonospaceTextMeasure`] uses a fixed
//! advance per character and never touches the font database.

use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight, fontdb,
};
use log::{debug, info};

use crate::draw::{FontSpec, FontStyle, FontWeight};

/// Average advance of a proportional glyph, relative to the font size.
///
/// Used when no font can shape the text at all.
const FALLBACK_ADVANCE: f32 = 0.55;

/// Measures the painted width of a single line of text.
pub trait TextMeasure: fmt::Debug + Send + Sync {
    /// Returns the advance width of `text` in pixels when set in `font`.
    ///
    /// Trailing spaces count toward the width.
    fn measure(&self, text: &str, font: &FontSpec) -> f32;
}

/// Where [`ShapedTextMeasure`] looks for fonts.
#[derive(Debug, Clone, Default)]
pub struct FontSources {
    load_system_fonts: bool,
    dirs: Vec<PathBuf>,
}

impl FontSources {
    /// Fonts installed on the host system.
    pub fn system() -> Self {
        Self {
            load_system_fonts: true,
            dirs: Vec::new(),
        }
    }

    /// No fonts at all; measurement falls back to an average glyph advance.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Adds a directory scanned recursively for font files.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    pub fn load_system_fonts(&self) -> bool {
        self.load_system_fonts
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Builds a font database from these sources.
    pub fn build_database(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();
        if self.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.dirs {
            db.load_fonts_dir(dir);
        }
        debug!(faces = db.len(); "Font database loaded");
        db
    }
}

/// Measures text by shaping it with cosmic-text.
///
/// Shaping handles ligatures, kerning and font fallback, so the result matches
/// what the rasterizer later paints with the same fonts.
pub struct ShapedTextMeasure {
    font_system: Arc<Mutex<FontSystem>>,
    has_faces: bool,
}

impl ShapedTextMeasure {
    /// Creates a measurer over fonts loaded from `sources`.
    pub fn new(sources: &FontSources) -> Self {
        info!(
            system_fonts = sources.load_system_fonts(),
            font_dirs = sources.dirs().len();
            "Initializing FontSystem"
        );
        let db = sources.build_database();
        Self {
            has_faces: !db.is_empty(),
            font_system: Arc::new(Mutex::new(FontSystem::new_with_locale_and_db(
                String::from("en-US"),
                db,
            ))),
        }
    }
}

impl Default for ShapedTextMeasure {
    fn default() -> Self {
        Self::new(&FontSources::system())
    }
}

impl fmt::Debug for ShapedTextMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapedTextMeasure").finish_non_exhaustive()
    }
}

impl TextMeasure for ShapedTextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        if !self.has_faces {
            return fallback_width(text, font);
        }

        // A panic while shaping leaves the FontSystem usable
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font.size(), font.size() * 1.15);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(font.family()));
        if font.weight() == FontWeight::Bold {
            attrs = attrs.weight(Weight::BOLD);
        }
        if font.style() == FontStyle::Italic {
            attrs = attrs.style(Style::Italic);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(0.0_f32, f32::max);

        if width > 0.0 {
            width
        } else {
            fallback_width(text, font)
        }
    }
}

fn fallback_width(text: &str, font: &FontSpec) -> f32 {
    text.chars().count() as f32 * font.size() * FALLBACK_ADVANCE
}

/// Measures text as if every character had the same advance.
///
/// Deterministic across hosts, which makes it the measure of choice for
/// tests and reproducible layouts.
///
/// ```
/// # use shayari_core::draw::{FontSpec, MonospaceTextMeasure, TextMeasure};
/// let measure = MonospaceTextMeasure::new(0.5);
/// assert_eq!(measure.measure("abcd", &FontSpec::new("Arial", 10.0)), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceTextMeasure {
    advance: f32,
}

impl MonospaceTextMeasure {
    /// Creates a measure where each character advances `advance × font size`.
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl Default for MonospaceTextMeasure {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasure for MonospaceTextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size() * self.advance
    }
}
