//! The card record handed to the renderer.
//!
//! A [`CardData`] is an immutable snapshot of one verse, its author line and
//! the chosen background. It can only be built through [`CardData::new`], which
//! rejects blank verse text, so every value the renderer receives is valid.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author shown when a card has no (or only a blank) author.
pub const ANONYMOUS: &str = "Anonymous";

/// Caller-supplied identifier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Errors raised while building a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card {0} has no verse text")]
    EmptyText(CardId),
}

/// One verse + author + background composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    id: CardId,
    text: String,
    author: String,
    background: String,
}

impl CardData {
    /// Creates a card.
    ///
    /// The background is kept verbatim: identifiers that do not name a known
    /// palette are resolved at render time.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptyText`] if `text` is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shayari_core::card::{CardData, CardId};
    /// let card = CardData::new(CardId::new(7), "Hi", "", "gradient2").unwrap();
    /// assert_eq!(card.display_author(), "Anonymous");
    ///
    /// assert!(CardData::new(CardId::new(8), "  \n ", "Mir", "gradient1").is_err());
    /// ```
    pub fn new(
        id: CardId,
        text: impl Into<String>,
        author: impl Into<String>,
        background: impl Into<String>,
    ) -> Result<Self, CardError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CardError::EmptyText(id));
        }

        Ok(Self {
            id,
            text,
            author: author.into(),
            background: background.into(),
        })
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// The verse body, explicit line breaks included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The author exactly as supplied.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// The author to show, [`ANONYMOUS`] when empty or blank.
    pub fn display_author(&self) -> &str {
        if self.author.trim().is_empty() {
            ANONYMOUS
        } else {
            &self.author
        }
    }

    /// The attribution line painted under the verse: `"- {author}"`.
    pub fn attribution(&self) -> String {
        format!("- {}", self.display_author())
    }

    /// Plain-text rendition for clipboards: verse, blank line, attribution.
    ///
    /// ```
    /// # use shayari_core::card::{CardData, CardId};
    /// let card = CardData::new(CardId::new(1), "Line one\nLine two", "Ghalib", "gradient1").unwrap();
    /// assert_eq!(card.plain_text(), "Line one\nLine two\n\n- Ghalib");
    /// ```
    pub fn plain_text(&self) -> String {
        format!("{}\n\n{}", self.text, self.attribution())
    }
}
