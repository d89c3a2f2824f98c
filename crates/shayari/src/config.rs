//! Configuration types for card rendering.
//!
//! All types implement [`serde::Deserialize`] and default every field, so a
//! partial (or empty) TOML file is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`StyleConfig`] - Font family and Document-mode accent colour.
//! - [`TextConfig`] - Which text measure the layout uses.
//! - [`FontConfig`] - Where fonts are loaded from.
//!
//! # Example
//!
//! ```
//! # use shayari::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().font_family(), "Arial");
//! assert!(config.style().accent_color().is_ok());
//! ```

use std::{path::PathBuf, sync::Arc};

use serde::Deserialize;

use shayari_core::{
    color::Color,
    draw::{FontSources, MonospaceTextMeasure, ShapedTextMeasure, TextMeasure},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    text: TextConfig,

    #[serde(default)]
    fonts: FontConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, text: TextConfig, fonts: FontConfig) -> Self {
        Self { style, text, fonts }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    pub fn fonts(&self) -> &FontConfig {
        &self.fonts
    }
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_accent_color() -> String {
    "#F59E0B".to_string()
}

/// Visual styling shared by both render modes.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Family used for all card text.
    #[serde(default = "default_font_family")]
    font_family: String,

    /// Colour of the Document-mode icons and chrome labels.
    #[serde(default = "default_accent_color")]
    accent_color: String,
}

impl StyleConfig {
    pub fn new(font_family: impl Into<String>, accent_color: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            accent_color: accent_color.into(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the parsed accent [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured colour string cannot be parsed.
    pub fn accent_color(&self) -> Result<Color, String> {
        Color::new(&self.accent_color)
            .map_err(|err| format!("Invalid accent color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(default_font_family(), default_accent_color())
    }
}

/// How line widths are measured during wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Shape text against the configured fonts.
    #[default]
    Shaped,
    /// Fixed advance per character.
    Monospace,
}

fn default_monospace_advance() -> f32 {
    0.6
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    measurement: Measurement,

    /// Advance per character, relative to the font size, for
    /// [`Measurement::Monospace`].
    #[serde(default = "default_monospace_advance")]
    monospace_advance: f32,
}

impl TextConfig {
    pub fn new(measurement: Measurement, monospace_advance: f32) -> Self {
        Self {
            measurement,
            monospace_advance,
        }
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn monospace_advance(&self) -> f32 {
        self.monospace_advance
    }

    /// Builds the configured text measure.
    pub fn build_measure(&self, fonts: &FontSources) -> Arc<dyn TextMeasure> {
        match self.measurement {
            Measurement::Shaped => Arc::new(ShapedTextMeasure::new(fonts)),
            Measurement::Monospace => Arc::new(MonospaceTextMeasure::new(self.monospace_advance)),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self::new(Measurement::default(), default_monospace_advance())
    }
}

fn default_load_system_fonts() -> bool {
    true
}

/// Font locations used for both measurement and rasterisation.
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Extra directories scanned for font files.
    #[serde(default)]
    dirs: Vec<PathBuf>,

    #[serde(default = "default_load_system_fonts")]
    load_system_fonts: bool,
}

impl FontConfig {
    pub fn new(dirs: Vec<PathBuf>, load_system_fonts: bool) -> Self {
        Self {
            dirs,
            load_system_fonts,
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn load_system_fonts(&self) -> bool {
        self.load_system_fonts
    }

    pub fn sources(&self) -> FontSources {
        self.dirs.iter().fold(
            FontSources::empty().with_system_fonts(self.load_system_fonts),
            |sources, dir| sources.with_dir(dir.clone()),
        )
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::new(Vec::new(), default_load_system_fonts())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.style().font_family(), "Arial");
        assert_eq!(config.style().accent_color().unwrap().to_string(), "#f59e0b");
        assert_eq!(config.text().measurement(), Measurement::Shaped);
        assert_eq!(config.text().monospace_advance(), 0.6);
        assert!(config.fonts().load_system_fonts());
        assert!(config.fonts().dirs().is_empty());
    }

    #[test]
    fn test_invalid_accent_color() {
        let style = StyleConfig::new("Arial", "not-a-color");
        let err = style.accent_color().unwrap_err();
        assert!(err.starts_with("Invalid accent color in config"));
    }

    #[test]
    fn test_font_sources_from_config() {
        let fonts = FontConfig::new(vec![PathBuf::from("./fonts")], false);
        let sources = fonts.sources();
        assert!(!sources.load_system_fonts());
        assert_eq!(sources.dirs(), [Path::new("./fonts").to_path_buf()]);
    }

    #[test]
    fn test_monospace_measure_from_config() {
        let text = TextConfig::new(Measurement::Monospace, 0.5);
        let measure = text.build_measure(&FontSources::empty());
        let font = shayari_core::draw::FontSpec::new("Arial", 10.0);
        assert_eq!(measure.measure("abcd", &font), 20.0);
    }
}
