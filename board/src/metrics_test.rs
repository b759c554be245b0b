#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::CardId;
use crate::seed::initial_cards;

fn card(column: Column, value: f64) -> Card {
    Card { id: CardId::generate(), title: "t".to_owned(), client: "c".to_owned(), value, column }
}

// =============================================================
// Badge
// =============================================================

#[test]
fn badge_per_column() {
    assert_eq!(Column::Won.badge(), Badge::Success);
    assert_eq!(Column::InProgress.badge(), Badge::Secondary);
    assert_eq!(Column::Submitted.badge(), Badge::Secondary);
    assert_eq!(Column::Lost.badge(), Badge::Destructive);
    assert_eq!(Column::New.badge(), Badge::Outline);
}

// =============================================================
// column_summary
// =============================================================

#[test]
fn column_summary_of_seed_data() {
    let cards = initial_cards();
    let summary = column_summary(&cards);

    let counts: Vec<_> = summary.iter().map(|s| (s.column, s.count)).collect();
    assert_eq!(
        counts,
        vec![
            (Column::New, 2),
            (Column::InProgress, 2),
            (Column::Submitted, 1),
            (Column::Won, 1),
            (Column::Lost, 1),
        ]
    );
    assert_eq!(summary[Column::New.index()].total_value, 170_000.0);
    assert_eq!(summary[Column::Won.index()].total_value, 300_000.0);
}

#[test]
fn column_summary_empty_board_has_all_columns() {
    let summary = column_summary(&Vec::<Card>::new());
    assert_eq!(summary.len(), 5);
    assert!(summary.iter().all(|s| s.count == 0 && s.total_value == 0.0));
}

// =============================================================
// PipelineSummary
// =============================================================

#[test]
fn pipeline_summary_of_seed_data() {
    let cards = initial_cards();
    let summary = PipelineSummary::from_cards(&cards);

    assert_eq!(summary.total_value, 935_000.0);
    assert_eq!(summary.open_value, 590_000.0);
    assert_eq!(summary.won_value, 300_000.0);
    assert_eq!(summary.win_rate, Some(50.0));
    assert_eq!(summary.active_count, 5);
    assert_eq!(summary.card_count, 7);
}

#[test]
fn win_rate_is_none_without_closed_cards() {
    let cards = vec![card(Column::New, 10.0), card(Column::Submitted, 20.0)];
    assert_eq!(PipelineSummary::from_cards(&cards).win_rate, None);
}

#[test]
fn win_rate_counts_cards_not_value() {
    let cards = vec![
        card(Column::Won, 1.0),
        card(Column::Won, 1.0),
        card(Column::Won, 1.0),
        card(Column::Lost, 1_000_000.0),
    ];
    assert_eq!(PipelineSummary::from_cards(&cards).win_rate, Some(75.0));
}

#[test]
fn summary_serializes_with_badge_columns() {
    let cards = initial_cards();
    let json = serde_json::to_value(PipelineSummary::from_cards(&cards)).unwrap();
    assert_eq!(json["card_count"], 7);
    assert_eq!(json["columns"][1]["column"], "In Progress");
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(950.0), "$950");
    assert_eq!(format_currency(75_000.0), "$75,000");
    assert_eq!(format_currency(1_250_000.0), "$1,250,000");
    assert_eq!(format_currency(100_000.0), "$100,000");
}

#[test]
fn format_currency_rounds_to_whole_dollars() {
    assert_eq!(format_currency(1234.6), "$1,235");
}

#[test]
fn format_currency_negative() {
    assert_eq!(format_currency(-4500.0), "-$4,500");
}

#[test]
fn format_compact_units() {
    assert_eq!(format_compact(950.0), "$950");
    assert_eq!(format_compact(580_000.0), "$580K");
    assert_eq!(format_compact(1_200_000.0), "$1.2M");
    assert_eq!(format_compact(1_000_000.0), "$1M");
    assert_eq!(format_compact(2_500_000_000.0), "$2.5B");
}

#[test]
fn format_compact_promotes_rounded_thousand() {
    assert_eq!(format_compact(999_990.0), "$1M");
}

#[test]
fn format_compact_promotes_rounded_dollars_to_thousand() {
    assert_eq!(format_compact(999.6), "$1K");
    assert_eq!(format_compact(-999.6), "-$1K");
    assert_eq!(format_compact(999.4), "$999");
}
