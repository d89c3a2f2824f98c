//! Shayari CLI library
//!
//! This module contains the core CLI logic: loading a card file, rendering
//! its cards and writing the images next to each other in one directory.

pub mod error_adapter;

mod args;
mod card_file;
mod config;

pub use args::{Args, Format, ModeArg};
pub use card_file::CardFileError;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

use shayari::{
    CardRenderer, RenderMode, ShayariError,
    card::{CardData, CardId},
    palette::PaletteStore,
    store::{CardStore, StoreError},
};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Shayari(#[from] ShayariError),

    #[error(transparent)]
    CardFile(CardFileError),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Shayari(ShayariError::Io(err))
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Shayari(ShayariError::Store(err))
    }
}

/// Run the shayari CLI application
///
/// Loads the card file, then either prints plain-text renditions or renders
/// every selected card in every selected mode into the output directory.
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - File I/O errors
/// - Malformed card or configuration files
/// - Cards the store rejects (duplicate ids, blank text, unknown `--card`)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list_backgrounds {
        for palette in PaletteStore::all() {
            println!("{}\t{}", palette.id(), palette.preview());
        }
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .ok_or_else(|| ShayariError::Validation("no input card file given".to_string()))?;

    info!(
        input_path = input,
        output_path = args.output;
        "Processing card file"
    );

    let source = fs::read_to_string(input)?;
    let store = card_file::load(input, &source)?;
    let cards = select_cards(&store, args.card)?;

    if args.plain_text {
        for card in &cards {
            println!("{}\n", card.plain_text());
        }
        return Ok(());
    }

    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = CardRenderer::new(app_config)?;

    fs::create_dir_all(&args.output)?;
    for card in &cards {
        for &mode in args.mode.modes() {
            let path = render_card(&renderer, card, mode, args.format, Path::new(&args.output))?;
            info!(card_id = card.id().get(), output_file = path.display().to_string(); "Card exported");
        }
    }

    info!(cards = cards.len(); "All cards exported");
    Ok(())
}

fn select_cards(store: &CardStore, id: Option<u64>) -> Result<Vec<CardData>, StoreError> {
    match id {
        Some(id) => {
            let id = CardId::new(id);
            let card = store.snapshot(id).ok_or(StoreError::NotFound(id))?;
            Ok(vec![card])
        }
        None => Ok(store.iter().cloned().collect()),
    }
}

/// Renders one card and writes it into `dir`. Nothing is written when the
/// render fails.
fn render_card(
    renderer: &CardRenderer,
    card: &CardData,
    mode: RenderMode,
    format: Format,
    dir: &Path,
) -> Result<PathBuf, ShayariError> {
    let (file_name, bytes) = match format {
        Format::Png => {
            let result = renderer.render(mode, card)?;
            (PathBuf::from(result.suggested_filename()), result.into_png())
        }
        Format::Svg => {
            let svg = renderer.render_svg(mode, card)?;
            let file_name = PathBuf::from(mode.suggested_filename(card.id())).with_extension("svg");
            (file_name, svg.into_bytes())
        }
    };

    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CardStore {
        let mut store = CardStore::new();
        store.create(CardId::new(1), "one", "", "gradient1").unwrap();
        store.create(CardId::new(2), "two", "", "gradient2").unwrap();
        store
    }

    #[test]
    fn test_select_all_cards_newest_first() {
        let cards = select_cards(&store(), None).unwrap();
        let ids: Vec<_> = cards.iter().map(|card| card.id().get()).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn test_select_single_card() {
        let cards = select_cards(&store(), Some(1)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].text(), "one");

        assert_eq!(
            select_cards(&store(), Some(7)).unwrap_err(),
            StoreError::NotFound(CardId::new(7))
        );
    }
}
