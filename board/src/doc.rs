//! Document model: proposal cards, pipeline columns, and the in-memory store.
//!
//! This module defines what lives on the board (`Card`, `Column`) and the
//! runtime store that owns the authoritative card list (`CardStore`).
//!
//! Data flows into this layer from seed data, a JSON snapshot, or the new-RFP
//! wizard. After that the only mutation is [`CardStore::reassign_column`], which
//! the drag controller calls when a card is dropped on a different column. The
//! view layer reads cards back through [`CardStore::cards`] and
//! [`CardStore::cards_in`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Errors raised while building or loading a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("unknown column label: {0:?}")]
    UnknownColumn(String),
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),
    #[error("card {id} has an invalid value: {value}")]
    InvalidValue { id: CardId, value: f64 },
    #[error("invalid card snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Opaque, stable identifier of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for cards created at runtime.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Pipeline stage of a proposal. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Submitted")]
    Submitted,
    #[serde(rename = "Won")]
    Won,
    #[serde(rename = "Lost")]
    Lost,
}

impl Column {
    /// Every column, in display order.
    pub const ALL: [Column; 5] = [Self::New, Self::InProgress, Self::Submitted, Self::Won, Self::Lost];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Submitted => "Submitted",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Zero-based position in display order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::New => 0,
            Self::InProgress => 1,
            Self::Submitted => 2,
            Self::Won => 3,
            Self::Lost => 4,
        }
    }

    /// Whether a proposal in this column is still being worked.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::New | Self::InProgress | Self::Submitted)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    /// Accepts the display label case-insensitively; `-` and `_` stand in for
    /// the space in "In Progress" so the label works as a shell argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|col| col.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| BoardError::UnknownColumn(s.to_owned()))
    }
}

/// One proposal on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier.
    pub id: CardId,
    /// Proposal title shown on the card.
    pub title: String,
    /// Name of the client the proposal is for.
    pub client: String,
    /// Proposal value in whole currency units. Never negative.
    pub value: f64,
    /// Current pipeline stage.
    pub column: Column,
}

impl Card {
    fn validate(&self) -> Result<(), BoardError> {
        if self.value.is_finite() && self.value >= 0.0 {
            Ok(())
        } else {
            Err(BoardError::InvalidValue { id: self.id.clone(), value: self.value })
        }
    }
}

/// Outcome of [`CardStore::reassign_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reassign {
    /// The card changed column.
    Moved { from: Column, to: Column },
    /// The card was already in the requested column.
    Unchanged,
    /// No card has that id. Tolerated: the card may have been removed elsewhere.
    UnknownCard,
}

/// Immutable view of the card list at one revision.
pub type Snapshot = Arc<Vec<Arc<Card>>>;

/// In-memory store of cards; the single source of truth for the board.
///
/// Every mutation produces a new list and swaps it in, sharing the `Arc`s of
/// untouched cards with the previous list. Snapshots handed out earlier keep
/// describing the revision they were taken at.
#[derive(Debug)]
pub struct CardStore {
    cards: Snapshot,
    revision: u64,
}

impl CardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Arc::new(Vec::new()), revision: 0 }
    }

    /// Build a store from an initial card list.
    pub fn with_cards(cards: Vec<Card>) -> Result<Self, BoardError> {
        let mut store = Self::new();
        store.load_snapshot(cards)?;
        Ok(store)
    }

    /// Build a store from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::with_cards(cards)
    }

    /// Replace all cards with a full snapshot. The store is left untouched when
    /// the snapshot holds a duplicate id or an invalid value.
    pub fn load_snapshot(&mut self, cards: Vec<Card>) -> Result<(), BoardError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            card.validate()?;
            if !seen.insert(card.id.clone()) {
                return Err(BoardError::DuplicateCard(card.id.clone()));
            }
        }
        self.commit(cards.into_iter().map(Arc::new).collect());
        Ok(())
    }

    /// Append a card created by an external flow (e.g. the new-RFP wizard).
    pub fn insert(&mut self, card: Card) -> Result<(), BoardError> {
        card.validate()?;
        if self.get(&card.id).is_some() {
            return Err(BoardError::DuplicateCard(card.id));
        }
        let mut next: Vec<Arc<Card>> = self.cards.iter().cloned().collect();
        next.push(Arc::new(card));
        self.commit(next);
        Ok(())
    }

    /// Move a card to `column`.
    ///
    /// Unknown ids and same-column requests leave the list (and the revision)
    /// exactly as they were.
    pub fn reassign_column(&mut self, id: &CardId, column: Column) -> Reassign {
        let Some(current) = self.get(id) else {
            debug!(card = %id, "reassign ignored: unknown card");
            return Reassign::UnknownCard;
        };
        let from = current.column;
        if from == column {
            return Reassign::Unchanged;
        }

        let next = self
            .cards
            .iter()
            .map(|card| {
                if &card.id == id {
                    Arc::new(Card { column, ..Card::clone(card) })
                } else {
                    Arc::clone(card)
                }
            })
            .collect();
        self.commit(next);
        Reassign::Moved { from, to: column }
    }

    fn commit(&mut self, cards: Vec<Arc<Card>>) {
        self.cards = Arc::new(cards);
        self.revision += 1;
    }

    /// Return a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id).map(AsRef::as_ref)
    }

    /// All cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().map(AsRef::as_ref)
    }

    /// Cards currently in `column`, in insertion order.
    pub fn cards_in(&self, column: Column) -> impl Iterator<Item = &Card> {
        self.cards().filter(move |card| card.column == column)
    }

    /// Cheap shared handle to the current card list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.cards)
    }

    /// Counter bumped once per committed change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of cards currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the store contains no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}
