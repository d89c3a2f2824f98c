//! An explicit, in-memory collection of cards.
//!
//! [`CardStore`] keeps cards newest first, keyed by caller-supplied
//! [`CardId`]s. The renderer never borrows from the store; callers hand it an
//! owned [`CardStore::snapshot`] so later edits cannot affect a render.

use indexmap::IndexMap;
use log::{debug, info};
use thiserror::Error;

use shayari_core::card::{ANONYMOUS, CardData, CardError, CardId};

/// Errors raised by [`CardStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a card with id {0} already exists")]
    DuplicateId(CardId),

    #[error("no card with id {0}")]
    NotFound(CardId),

    #[error(transparent)]
    Card(#[from] CardError),
}

/// A partial edit of a card. Fields left `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    text: Option<String>,
    author: Option<String>,
    background: Option<String>,
}

impl CardUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the author; a blank author is stored as "Anonymous".
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.author.is_none() && self.background.is_none()
    }
}

/// Newest-first collection of cards.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: IndexMap<CardId, CardData>,
}

fn stored_author(author: String) -> String {
    if author.trim().is_empty() {
        ANONYMOUS.to_string()
    } else {
        author
    }
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card in front of all existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if `id` is taken and
    /// [`StoreError::Card`] if `text` is blank.
    pub fn create(
        &mut self,
        id: CardId,
        text: impl Into<String>,
        author: impl Into<String>,
        background: impl Into<String>,
    ) -> Result<&CardData, StoreError> {
        if self.cards.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        let card = CardData::new(id, text, stored_author(author.into()), background)?;
        self.cards.shift_insert(0, id, card);
        info!(card_id = id.get(), cards = self.cards.len(); "Card created");
        Ok(&self.cards[0])
    }

    /// Applies `update` to the card `id`, keeping its position.
    ///
    /// Nothing changes when the update is rejected. An empty update only
    /// checks that the card exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id and
    /// [`StoreError::Card`] if the new text is blank.
    pub fn update(&mut self, id: CardId, update: CardUpdate) -> Result<&CardData, StoreError> {
        let card = self.cards.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if update.is_empty() {
            return Ok(card);
        }

        let CardUpdate {
            text,
            author,
            background,
        } = update;
        let updated = CardData::new(
            id,
            text.unwrap_or_else(|| card.text().to_string()),
            author.map_or_else(|| card.author().to_string(), stored_author),
            background.unwrap_or_else(|| card.background().to_string()),
        )?;
        *card = updated;
        debug!(card_id = id.get(); "Card updated");
        Ok(card)
    }

    /// Removes and returns the card `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: CardId) -> Result<CardData, StoreError> {
        let card = self.cards.shift_remove(&id).ok_or(StoreError::NotFound(id))?;
        info!(card_id = id.get(), cards = self.cards.len(); "Card deleted");
        Ok(card)
    }

    pub fn get(&self, id: CardId) -> Option<&CardData> {
        self.cards.get(&id)
    }

    /// An owned copy of the card `id`, for handing to the renderer.
    pub fn snapshot(&self, id: CardId) -> Option<CardData> {
        self.get(id).cloned()
    }

    /// Cards, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CardData> {
        self.cards.values()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
