//! Placeholder proposals, clients, and detail-page material for a fresh board.

use crate::clients::{Client, ClientBook};
use crate::detail::{ActivityEntry, Document};
use crate::doc::{Card, CardId, Column};

const INITIAL: [(&str, &str, &str, f64, Column); 7] = [
    ("1", "Innovate Corp Q3 Proposal", "Innovate Corp", 75_000.0, Column::InProgress),
    ("2", "Synergy Solutions Website Redesign", "Synergy Solutions", 120_000.0, Column::New),
    ("3", "TechGenius IT Support Contract", "TechGenius Inc.", 50_000.0, Column::New),
    ("4", "Global-Trade Logistics Platform", "Global-Trade", 250_000.0, Column::Submitted),
    ("5", "DataDriven Analytics Dashboard", "DataDriven LLC", 95_000.0, Column::InProgress),
    ("6", "Apex Industries Marketing Campaign", "Apex Industries", 45_000.0, Column::Lost),
    ("7", "QuantumLeap Software Suite", "QuantumLeap", 300_000.0, Column::Won),
];

/// The seven demo proposals, ids `"1"` through `"7"`.
#[must_use]
pub fn initial_cards() -> Vec<Card> {
    INITIAL
        .iter()
        .map(|&(id, title, client, value, column)| Card {
            id: CardId::from(id),
            title: title.to_owned(),
            client: client.to_owned(),
            value,
            column,
        })
        .collect()
}

const CLIENTS: [(&str, &str, &str, &str, &str, u32); 4] = [
    ("CLI001", "Innovate Corp", "Alice Johnson", "alice.j@innovate.com", "123-456-7890", 5),
    ("CLI002", "Solutions Inc.", "Bob Williams", "bob.w@solutions.com", "234-567-8901", 3),
    ("CLI003", "Data Dynamics", "Charlie Brown", "charlie.b@datadynamics.com", "345-678-9012", 8),
    ("CLI004", "NextGen Systems", "Diana Miller", "diana.m@nextgen.com", "456-789-0123", 2),
];

/// The four demo clients, ids `CLI001` through `CLI004`.
#[must_use]
pub fn initial_clients() -> ClientBook {
    ClientBook::with_clients(
        CLIENTS
            .iter()
            .map(|&(id, name, contact, email, phone, rfp_count)| Client {
                id: id.to_owned(),
                name: name.to_owned(),
                contact_person: contact.to_owned(),
                email: email.to_owned(),
                phone: phone.to_owned(),
                rfp_count,
            })
            .collect(),
    )
}

const DOCUMENTS: [(&str, &str); 3] = [
    ("RFP_InnovateCorp_Q3_Final.pdf", "2.5 MB"),
    ("Technical_Specifications.docx", "1.2 MB"),
    ("Project_Timeline.xlsx", "450 KB"),
];

const HISTORY: [(&str, &str, &str); 3] = [
    ("Jane Doe", "added note: \"Client requested clarification on section 3.2.\"", "2024-07-28 02:45 PM"),
    ("Alex Ray", "uploaded document \"Technical_Specifications.docx\".", "2024-07-27 11:20 AM"),
    ("System", "created the RFP.", "2024-07-25 09:00 AM"),
];

/// Attachments shown on every proposal's detail page.
#[must_use]
pub fn sample_documents() -> Vec<Document> {
    DOCUMENTS.iter().map(|&(name, size)| Document { name: name.to_owned(), size: size.to_owned() }).collect()
}

/// Activity log for `card`, newest first. Cards that have left `New` get a
/// status entry naming their current column.
#[must_use]
pub fn sample_activity(card: &Card) -> Vec<ActivityEntry> {
    let status = (card.column != Column::New).then(|| ActivityEntry {
        user: "Alex Ray".to_owned(),
        action: format!("changed status to \"{}\".", card.column),
        timestamp: "2024-07-29 10:05 AM".to_owned(),
    });
    status
        .into_iter()
        .chain(HISTORY.iter().map(|&(user, action, timestamp)| ActivityEntry {
            user: user.to_owned(),
            action: action.to_owned(),
            timestamp: timestamp.to_owned(),
        }))
        .collect()
}
