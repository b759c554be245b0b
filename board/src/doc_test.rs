#![allow(clippy::float_cmp)]

use super::*;

fn card(id: &str, column: Column) -> Card {
    Card {
        id: CardId::from(id),
        title: format!("Proposal {id}"),
        client: format!("Client {id}"),
        value: 1000.0,
        column,
    }
}

fn store_with(cards: Vec<Card>) -> CardStore {
    CardStore::with_cards(cards).unwrap()
}

fn columns(store: &CardStore) -> Vec<(String, Column)> {
    store.cards().map(|c| (c.id.to_string(), c.column)).collect()
}

// =============================================================
// Column
// =============================================================

#[test]
fn column_all_is_display_order() {
    assert_eq!(
        Column::ALL,
        [Column::New, Column::InProgress, Column::Submitted, Column::Won, Column::Lost]
    );
    for (i, col) in Column::ALL.iter().enumerate() {
        assert_eq!(col.index(), i);
    }
}

#[test]
fn column_serde_uses_labels() {
    let cases = [
        (Column::New, "\"New\""),
        (Column::InProgress, "\"In Progress\""),
        (Column::Submitted, "\"Submitted\""),
        (Column::Won, "\"Won\""),
        (Column::Lost, "\"Lost\""),
    ];
    for (col, expected) in cases {
        assert_eq!(serde_json::to_string(&col).unwrap(), expected);
        let back: Column = serde_json::from_str(expected).unwrap();
        assert_eq!(back, col);
    }
}

#[test]
fn column_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<Column>("\"Archived\"").is_err());
    assert!(serde_json::from_str::<Column>("\"InProgress\"").is_err());
}

#[test]
fn column_display_matches_label() {
    for col in Column::ALL {
        assert_eq!(col.to_string(), col.label());
    }
}

#[test]
fn column_from_str_accepts_label_variants() {
    assert_eq!("New".parse::<Column>().unwrap(), Column::New);
    assert_eq!("in progress".parse::<Column>().unwrap(), Column::InProgress);
    assert_eq!("in-progress".parse::<Column>().unwrap(), Column::InProgress);
    assert_eq!("IN_PROGRESS".parse::<Column>().unwrap(), Column::InProgress);
    assert_eq!(" won ".parse::<Column>().unwrap(), Column::Won);
}

#[test]
fn column_from_str_unknown_label_errors() {
    let err = "Archived".parse::<Column>().unwrap_err();
    assert!(matches!(err, BoardError::UnknownColumn(ref s) if s == "Archived"));
}

#[test]
fn column_is_open() {
    assert!(Column::New.is_open());
    assert!(Column::InProgress.is_open());
    assert!(Column::Submitted.is_open());
    assert!(!Column::Won.is_open());
    assert!(!Column::Lost.is_open());
}

// =============================================================
// CardId
// =============================================================

#[test]
fn card_id_serializes_as_plain_string() {
    assert_eq!(serde_json::to_string(&CardId::from("7")).unwrap(), "\"7\"");
}

#[test]
fn card_id_generate_is_unique() {
    let a = CardId::generate();
    let b = CardId::generate();
    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
}

// =============================================================
// CardStore: construction
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = CardStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.revision(), 0);
}

#[test]
fn with_cards_keeps_insertion_order() {
    let store = store_with(vec![card("b", Column::New), card("a", Column::Won)]);
    let ids: Vec<_> = store.cards().map(|c| c.id.as_str().to_owned()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn load_snapshot_rejects_duplicate_ids() {
    let err = CardStore::with_cards(vec![card("1", Column::New), card("1", Column::Won)]).unwrap_err();
    assert!(matches!(err, BoardError::DuplicateCard(ref id) if id.as_str() == "1"));
}

#[test]
fn load_snapshot_rejects_negative_value() {
    let mut bad = card("1", Column::New);
    bad.value = -5.0;
    assert!(matches!(CardStore::with_cards(vec![bad]), Err(BoardError::InvalidValue { .. })));
}

#[test]
fn load_snapshot_failure_leaves_store_untouched() {
    let mut store = store_with(vec![card("1", Column::New)]);
    let before = columns(&store);
    let mut bad = card("2", Column::New);
    bad.value = f64::NAN;
    assert!(store.load_snapshot(vec![bad]).is_err());
    assert_eq!(columns(&store), before);
    assert_eq!(store.revision(), 1);
}

#[test]
fn from_json_parses_cards() {
    let json = r#"[
        {"id": "1", "title": "Q3 Proposal", "client": "Innovate Corp", "value": 75000, "column": "In Progress"}
    ]"#;
    let store = CardStore::from_json(json).unwrap();
    let c = store.get(&CardId::from("1")).unwrap();
    assert_eq!(c.column, Column::InProgress);
    assert_eq!(c.value, 75000.0);
}

#[test]
fn from_json_rejects_unknown_column() {
    let json = r#"[{"id": "1", "title": "t", "client": "c", "value": 1, "column": "Archived"}]"#;
    assert!(matches!(CardStore::from_json(json), Err(BoardError::Snapshot(_))));
}

#[test]
fn insert_appends_and_bumps_revision() {
    let mut store = store_with(vec![card("1", Column::New)]);
    store.insert(card("2", Column::Won)).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.revision(), 2);
    assert_eq!(store.get(&CardId::from("2")).unwrap().column, Column::Won);
}

#[test]
fn insert_rejects_duplicate() {
    let mut store = store_with(vec![card("1", Column::New)]);
    assert!(matches!(store.insert(card("1", Column::Lost)), Err(BoardError::DuplicateCard(_))));
    assert_eq!(store.len(), 1);
}

// =============================================================
// CardStore: reassign_column
// =============================================================

#[test]
fn reassign_moves_only_target_card() {
    let mut store = store_with(vec![card("1", Column::New), card("2", Column::New), card("3", Column::Submitted)]);
    let result = store.reassign_column(&CardId::from("2"), Column::Won);
    assert_eq!(result, Reassign::Moved { from: Column::New, to: Column::Won });
    assert_eq!(
        columns(&store),
        vec![
            ("1".to_owned(), Column::New),
            ("2".to_owned(), Column::Won),
            ("3".to_owned(), Column::Submitted),
        ]
    );
}

#[test]
fn reassign_preserves_other_attributes() {
    let mut store = store_with(vec![card("1", Column::New)]);
    let before = store.get(&CardId::from("1")).unwrap().clone();
    store.reassign_column(&CardId::from("1"), Column::Lost);
    let after = store.get(&CardId::from("1")).unwrap();
    assert_eq!(after.title, before.title);
    assert_eq!(after.client, before.client);
    assert_eq!(after.value, before.value);
    assert_eq!(after.column, Column::Lost);
}

#[test]
fn reassign_is_idempotent() {
    let mut store = store_with(vec![card("1", Column::New), card("2", Column::Submitted)]);
    let id = CardId::from("1");
    store.reassign_column(&id, Column::Won);
    let once = columns(&store);
    let revision = store.revision();

    assert_eq!(store.reassign_column(&id, Column::Won), Reassign::Unchanged);
    assert_eq!(columns(&store), once);
    assert_eq!(store.revision(), revision);
}

#[test]
fn reassign_unknown_id_is_noop() {
    let mut store = store_with(vec![card("1", Column::New), card("2", Column::Won)]);
    let before = store.snapshot();
    let revision = store.revision();

    assert_eq!(store.reassign_column(&CardId::from("missing"), Column::Lost), Reassign::UnknownCard);
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), revision);
    let owned = |snap: &Snapshot| snap.iter().map(|c| Card::clone(c)).collect::<Vec<_>>();
    assert_eq!(owned(&before), owned(&store.snapshot()));
}

#[test]
fn reassign_shares_untouched_cards() {
    let mut store = store_with(vec![card("1", Column::New), card("2", Column::New)]);
    let before = store.snapshot();
    store.reassign_column(&CardId::from("1"), Column::Won);
    let after = store.snapshot();

    assert!(!Arc::ptr_eq(&before, &after));
    assert!(!Arc::ptr_eq(&before[0], &after[0]));
    assert!(Arc::ptr_eq(&before[1], &after[1]));
}

#[test]
fn old_snapshot_keeps_old_revision() {
    let mut store = store_with(vec![card("1", Column::New)]);
    let before = store.snapshot();
    store.reassign_column(&CardId::from("1"), Column::Won);
    assert_eq!(before[0].column, Column::New);
    assert_eq!(store.get(&CardId::from("1")).unwrap().column, Column::Won);
}

#[test]
fn every_card_has_exactly_one_column_after_moves() {
    let mut store = store_with(vec![card("1", Column::New), card("2", Column::InProgress)]);
    for col in Column::ALL {
        store.reassign_column(&CardId::from("1"), col);
        let total: usize = Column::ALL.iter().map(|c| store.cards_in(*c).count()).sum();
        assert_eq!(total, store.len());
        assert_eq!(store.cards_in(col).filter(|c| c.id.as_str() == "1").count(), 1);
    }
}

#[test]
fn cards_in_filters_by_column() {
    let store = store_with(vec![card("1", Column::New), card("2", Column::Won), card("3", Column::New)]);
    let new_ids: Vec<_> = store.cards_in(Column::New).map(|c| c.id.as_str().to_owned()).collect();
    assert_eq!(new_ids, vec!["1", "3"]);
    assert_eq!(store.cards_in(Column::Lost).count(), 0);
}
