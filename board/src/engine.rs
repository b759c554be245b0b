use std::mem;

use tracing::{debug, info};

use crate::doc::{BoardError, Card, CardId, CardStore, Column, Reassign};
use crate::geom::Point;
use crate::hit::{LayoutSource, resolve_drop_target};
use crate::input::DragState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Toast shown after the new-RFP wizard adds a card.
pub const CARD_CREATED_TOAST: &str = "New RFP has been successfully created!";

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A card changed column; the host should re-render.
    BoardChanged { card_id: CardId, from: Column, to: Column },
    /// A card was added to the board; the host should re-render.
    CardCreated { card_id: CardId },
    /// User-visible notification text.
    Toast(String),
}

/// Drag interaction controller wrapped around the board's card store.
///
/// All handlers run synchronously on the caller's thread and return the
/// actions the host should apply. Nothing here blocks or retains layout.
#[derive(Debug, Default)]
pub struct BoardCore {
    pub store: CardStore,
    pub drag: DragState,
}

impl BoardCore {
    #[must_use]
    pub fn with_store(store: CardStore) -> Self {
        Self { store, drag: DragState::Idle }
    }

    // --- Input events ---

    /// The view layer picked up `card_id`.
    ///
    /// Unknown cards leave the controller idle. A drag-start that arrives
    /// mid-gesture replaces the tracked card.
    pub fn on_drag_start(&mut self, card_id: &CardId) {
        let Some(card) = self.store.get(card_id) else {
            debug!(card = %card_id, "drag start ignored: unknown card");
            self.drag = DragState::Idle;
            return;
        };
        if let Some(prev) = self.drag.dragged() {
            debug!(previous = %prev, card = %card_id, "drag start replaced an unfinished gesture");
        }
        self.drag = DragState::Dragging { card_id: card_id.clone(), origin: card.column };
    }

    /// The view layer released `card_id` at `release`.
    ///
    /// The layout is queried once, here. The gesture is cleared before
    /// anything else happens, so every exit path leaves the controller idle.
    pub fn on_drag_end<L>(&mut self, card_id: &CardId, release: Point, layout: &L) -> Vec<Action>
    where
        L: LayoutSource + ?Sized,
    {
        let gesture = mem::take(&mut self.drag);
        let Some(dragged) = gesture.dragged() else {
            debug!(card = %card_id, "drag end ignored: no gesture in progress");
            return Vec::new();
        };
        if dragged != card_id {
            debug!(dragged = %dragged, card = %card_id, "drag end ignored: card is not the one being dragged");
            return Vec::new();
        }

        let regions = layout.column_regions();
        let Some(target) = resolve_drop_target(release, &regions) else {
            debug!(card = %card_id, x = release.x, y = release.y, "drop outside every column");
            return Vec::new();
        };

        let Some(title) = self.store.get(card_id).map(|card| card.title.clone()) else {
            debug!(card = %card_id, "drop ignored: card left the board during the drag");
            return Vec::new();
        };

        match self.store.reassign_column(card_id, target) {
            Reassign::Moved { from, to } => {
                info!(card = %card_id, %from, %to, "card moved");
                vec![
                    Action::BoardChanged { card_id: card_id.clone(), from, to },
                    Action::Toast(format!("Moved \"{title}\" to {to}")),
                ]
            }
            Reassign::Unchanged | Reassign::UnknownCard => Vec::new(),
        }
    }

    // --- Data inputs ---

    /// Add a card produced by an external creation flow.
    pub fn create_card(&mut self, card: Card) -> Result<Vec<Action>, BoardError> {
        let card_id = card.id.clone();
        self.store.insert(card)?;
        info!(card = %card_id, "card created");
        Ok(vec![Action::CardCreated { card_id }, Action::Toast(CARD_CREATED_TOAST.to_owned())])
    }

    // --- Queries ---

    /// Current cards, in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.store.cards()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.store.get(id)
    }

    /// The card currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&CardId> {
        self.drag.dragged()
    }
}
