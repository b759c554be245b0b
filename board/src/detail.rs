//! What the detail page of one proposal shows besides the card itself.
//!
//! The board does not track attachments or history yet, so
//! [`RfpDetail::for_card`] fills both from the demo material in
//! [`crate::seed`]. The status entry of the activity log always reflects the
//! card's current column.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use serde::Serialize;

use crate::clients::{Client, ClientBook};
use crate::doc::Card;
use crate::seed::{sample_activity, sample_documents};

/// A file attached to a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    /// Human-readable size, e.g. `2.5 MB`.
    pub size: String,
}

/// One line of a proposal's history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub timestamp: String,
}

/// Everything the detail page renders for one card.
#[derive(Debug, Clone, Serialize)]
pub struct RfpDetail<'a> {
    pub card: &'a Card,
    /// The client record matching the card's client name, when there is one.
    pub client: Option<&'a Client>,
    pub documents: Vec<Document>,
    pub activity: Vec<ActivityEntry>,
}

impl<'a> RfpDetail<'a> {
    #[must_use]
    pub fn for_card(card: &'a Card, clients: &'a ClientBook) -> Self {
        Self {
            card,
            client: clients.find_by_name(&card.client),
            documents: sample_documents(),
            activity: sample_activity(card),
        }
    }
}
