//! Dashboard aggregates derived from the card list.
//!
//! Everything here is a pure reduction over `&Card`s: column header badges,
//! the pipeline summary shown on the dashboard, the status badge variant used
//! by the table view, and currency formatting.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde::Serialize;

use crate::doc::{Card, Column};

/// Visual variant of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Success,
    Secondary,
    Destructive,
    Outline,
}

impl Column {
    /// Badge variant for this status in the table view.
    #[must_use]
    pub fn badge(self) -> Badge {
        match self {
            Self::Won => Badge::Success,
            Self::InProgress | Self::Submitted => Badge::Secondary,
            Self::Lost => Badge::Destructive,
            Self::New => Badge::Outline,
        }
    }
}

/// Count and value of the cards in one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub total_value: f64,
}

/// One summary per column, in display order. Empty columns are included.
pub fn column_summary<'a, I>(cards: I) -> [ColumnSummary; 5]
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut out = Column::ALL.map(|column| ColumnSummary { column, count: 0, total_value: 0.0 });
    for card in cards {
        let slot = &mut out[card.column.index()];
        slot.count += 1;
        slot.total_value += card.value;
    }
    out
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    /// Value of every card on the board.
    pub total_value: f64,
    /// Value of cards still in New, In Progress, or Submitted.
    pub open_value: f64,
    /// Value of cards in Won.
    pub won_value: f64,
    /// Won / (Won + Lost) as a percentage; `None` until a proposal closes.
    pub win_rate: Option<f64>,
    /// Number of open proposals.
    pub active_count: usize,
    /// Number of cards on the board.
    pub card_count: usize,
    pub columns: [ColumnSummary; 5],
}

impl PipelineSummary {
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let columns = column_summary(cards);
        let of = |col: Column| columns[col.index()];

        let total_value = columns.iter().map(|c| c.total_value).sum();
        let open_value = columns.iter().filter(|c| c.column.is_open()).map(|c| c.total_value).sum();
        let active_count = columns.iter().filter(|c| c.column.is_open()).map(|c| c.count).sum();
        let card_count = columns.iter().map(|c| c.count).sum();

        let won = of(Column::Won).count;
        let closed = won + of(Column::Lost).count;
        #[allow(clippy::cast_precision_loss)]
        let win_rate = (closed > 0).then(|| won as f64 / closed as f64 * 100.0);

        Self {
            total_value,
            open_value,
            won_value: of(Column::Won).total_value,
            win_rate,
            active_count,
            card_count,
            columns,
        }
    }
}

/// Format a value as whole dollars with US digit grouping, e.g. `$1,250,000`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 { format!("-${grouped}") } else { format!("${grouped}") }
}

/// Format a value in the dashboard's short form, e.g. `$1.2M`, `$580K`, `$950`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    // 999.6 rounds to 1000 whole dollars; show it as 1K.
    let abs = if abs < 1e3 && abs.round() >= 1e3 { 1e3 } else { abs };
    for (i, (scale, suffix)) in UNITS.iter().enumerate() {
        if abs < *scale {
            continue;
        }
        let scaled = round_tenth(abs / scale);
        // 999_990 rounds to 1000.0K; show it as 1M instead.
        if scaled >= 1000.0 && i > 0 {
            let (bigger, bigger_suffix) = UNITS[i - 1];
            return format!("{sign}${}{bigger_suffix}", trim_tenth(round_tenth(abs / bigger)));
        }
        return format!("{sign}${}{suffix}", trim_tenth(scaled));
    }
    format!("{sign}${}", abs.round())
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn trim_tenth(v: f64) -> String {
    let s = format!("{v:.1}");
    s.strip_suffix(".0").map(str::to_owned).unwrap_or(s)
}
