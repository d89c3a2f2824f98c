//! Card files: TOML documents with one `[[cards]]` table per card.
//!
//! ```toml
//! [[cards]]
//! id = 1
//! text = """
//! Hazaron khwahishen aisi
//! ki har khwahish pe dam nikle"""
//! author = "Ghalib"        # optional
//! background = "gradient2" # optional
//! ```

use std::{fmt, ops::Range};

use log::debug;
use serde::Deserialize;

use shayari::{card::CardId, palette::PaletteId, store::CardStore};

use crate::CliError;

/// A card file that failed to parse, with the offending source.
#[derive(Debug)]
pub struct CardFileError {
    path: String,
    src: String,
    message: String,
    span: Option<Range<usize>>,
}

impl CardFileError {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending TOML, when known.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

impl fmt::Display for CardFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card file {}", self.path)
    }
}

impl std::error::Error for CardFileError {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardFile {
    #[serde(default)]
    cards: Vec<CardEntry>,
}

fn default_background() -> String {
    PaletteId::default().to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardEntry {
    id: CardId,
    text: String,
    #[serde(default)]
    author: String,
    #[serde(default = "default_background")]
    background: String,
}

/// Parses the card file at `path` with contents `src` into a store.
///
/// Cards are created in file order, so the last card in the file is the
/// newest one.
///
/// # Errors
///
/// Returns [`CliError::CardFile`] for malformed TOML and
/// [`CliError::Shayari`] for cards the store rejects (duplicate ids, blank
/// text).
pub fn load(path: &str, src: &str) -> Result<CardStore, CliError> {
    let file: CardFile = toml::from_str(src).map_err(|err| {
        CliError::CardFile(CardFileError {
            path: path.to_string(),
            src: src.to_string(),
            message: err.message().to_string(),
            span: err.span(),
        })
    })?;

    let mut store = CardStore::new();
    for entry in file.cards {
        store.create(entry.id, entry.text, entry.author, entry.background)?;
    }
    debug!(path, cards = store.len(); "Card file loaded");
    Ok(store)
}
