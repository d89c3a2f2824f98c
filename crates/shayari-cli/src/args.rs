//! Command-line argument definitions for the shayari CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the card file, which cards and modes to
//! render, the output format and location, configuration and logging.

use clap::{Parser, ValueEnum};

use shayari::RenderMode;

/// Which render modes to produce for each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Square,
    Document,
    Both,
}

impl ModeArg {
    pub fn modes(self) -> &'static [RenderMode] {
        match self {
            Self::Square => &[RenderMode::Square],
            Self::Document => &[RenderMode::Document],
            Self::Both => &RenderMode::ALL,
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Svg,
}

/// Command-line arguments for the shayari card renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input card file (TOML)
    #[arg(required_unless_present = "list_backgrounds")]
    pub input: Option<String>,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Render mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Square)]
    pub mode: ModeArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Render only the card with this id
    #[arg(long)]
    pub card: Option<u64>,

    /// Print the plain-text rendition of each card instead of rendering
    #[arg(long)]
    pub plain_text: bool,

    /// List the available background ids and exit
    #[arg(long)]
    pub list_backgrounds: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["shayari", "cards.toml"]).unwrap();
        assert_eq!(args.input.as_deref(), Some("cards.toml"));
        assert_eq!(args.output, ".");
        assert_eq!(args.mode, ModeArg::Square);
        assert_eq!(args.format, Format::Png);
        assert_eq!(args.card, None);
        assert!(!args.plain_text);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_mode_and_format() {
        let args = Args::try_parse_from([
            "shayari", "cards.toml", "-m", "both", "--format", "svg", "--card", "3",
        ])
        .unwrap();
        assert_eq!(args.mode.modes(), RenderMode::ALL);
        assert_eq!(args.format, Format::Svg);
        assert_eq!(args.card, Some(3));
    }

    #[test]
    fn test_input_required_unless_listing() {
        assert!(Args::try_parse_from(["shayari"]).is_err());
        let args = Args::try_parse_from(["shayari", "--list-backgrounds"]).unwrap();
        assert!(args.list_backgrounds);
        assert!(args.input.is_none());
    }
}
