//! Drag gesture state.
//!
//! `DragState` is the gesture tracked between drag-start and drag-end. Only one
//! gesture exists at a time; the controller resets it to `Idle` on every
//! drag-end, whatever the outcome.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{CardId, Column};

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next drag-start.
    #[default]
    Idle,
    /// The user is dragging a card.
    Dragging {
        /// Id of the card being dragged.
        card_id: CardId,
        /// Column the card was in when the gesture started. Informational only;
        /// the drop decision reads the store's current column at release.
        origin: Column,
    },
}

impl DragState {
    /// Id of the card being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&CardId> {
        match self {
            Self::Idle => None,
            Self::Dragging { card_id, .. } => Some(card_id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
