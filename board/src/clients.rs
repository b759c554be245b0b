//! Client list: the organizations proposals are written for.
//!
//! Clients are kept apart from the card store. A card names its client by
//! display name only, and [`ClientBook::find_by_name`] resolves that name when
//! a detail view wants contact information.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{CLIENT_MIN_NAME_CHARS, CLIENT_MIN_PHONE_CHARS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("not a valid email address: {0:?}")]
    InvalidEmail(String),
}

/// One client organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// `CLI` followed by a zero-padded sequence number, e.g. `CLI004`.
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    /// Proposals written for this client so far.
    pub rfp_count: u32,
}

/// Raw text entered into the add-client form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl ClientDraft {
    /// Check every field, in form order, and report the first failure.
    ///
    /// Lengths count characters after trimming surrounding whitespace.
    pub fn validate(&self) -> Result<(), ClientError> {
        min_chars(&self.name, "client name", CLIENT_MIN_NAME_CHARS)?;
        min_chars(&self.contact_person, "contact person", CLIENT_MIN_NAME_CHARS)?;
        let email = self.email.trim();
        if !is_email(email) {
            return Err(ClientError::InvalidEmail(email.to_owned()));
        }
        min_chars(&self.phone, "phone number", CLIENT_MIN_PHONE_CHARS)?;
        Ok(())
    }
}

fn min_chars(text: &str, field: &'static str, min: usize) -> Result<(), ClientError> {
    if text.trim().chars().count() < min { Err(ClientError::TooShort { field, min }) } else { Ok(()) }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dotted domain with no
/// empty labels.
fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !text.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Ordered list of clients, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct ClientBook {
    clients: Vec<Client>,
}

impl ClientBook {
    #[must_use]
    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Validate `draft` and append it as a client with no proposals yet.
    pub fn add(&mut self, draft: &ClientDraft) -> Result<&Client, ClientError> {
        draft.validate()?;
        let client = Client {
            id: format!("CLI{:03}", self.clients.len() + 1),
            name: draft.name.trim().to_owned(),
            contact_person: draft.contact_person.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            phone: draft.phone.trim().to_owned(),
            rfp_count: 0,
        };
        info!(client = %client.id, name = %client.name, "client added");
        self.clients.push(client);
        Ok(&self.clients[self.clients.len() - 1])
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// The client whose name matches `name`, ignoring ASCII case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
