//! Plain-text rendering of every screen: board, tables, dashboard, detail, wizard.
//!
//! Every function returns a `String` so output can be tested without a
//! terminal; `main` decides where it goes.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use board::clients::ClientBook;
use board::consts::WIZARD_TITLE;
use board::detail::RfpDetail;
use board::doc::{Card, CardStore, Column};
use board::hit::ColumnRegion;
use board::metrics::{Badge, PipelineSummary, column_summary, format_compact, format_currency};
use board::wizard::{StepStatus, Wizard, WizardStep};

/// Kanban view: one block per column with its count badge and cards.
pub fn render_board(store: &CardStore) -> String {
    let mut out = String::new();
    for summary in column_summary(store.cards()) {
        out.push_str(&format!(
            "== {} ({}) {}\n",
            summary.column,
            summary.count,
            format_currency(summary.total_value)
        ));
        if summary.count == 0 {
            out.push_str("   Drop cards here\n");
        }
        for card in store.cards_in(summary.column) {
            out.push_str(&card_line(card));
        }
    }
    out
}

fn card_line(card: &Card) -> String {
    format!("   [{}] {} | {} | {}\n", card.id, card.title, card.client, format_currency(card.value))
}

/// Table view with a status badge per row.
pub fn render_table(store: &CardStore) -> String {
    let rows = store.cards().map(|card| {
        [card.title.clone(), card.client.clone(), format_currency(card.value), status_badge(card.column)]
    });
    render_rows(["RFP Title", "Client", "Value", "Status"], rows)
}

/// Client list: name, contact, email, and how many proposals each has.
pub fn render_clients(book: &ClientBook) -> String {
    let rows = book.clients().map(|client| {
        [client.name.clone(), client.contact_person.clone(), client.email.clone(), client.rfp_count.to_string()]
    });
    render_rows(["Client Name", "Contact Person", "Email", "Active RFPs"], rows)
}

/// Left-aligned columns, two spaces apart, sized to the widest cell.
fn render_rows<const N: usize>(header: [&str; N], rows: impl Iterator<Item = [String; N]>) -> String {
    let header = header.map(str::to_owned);
    let rows: Vec<[String; N]> = rows.collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn status_badge(column: Column) -> String {
    let mark = match column.badge() {
        Badge::Success => '+',
        Badge::Secondary => '~',
        Badge::Destructive => 'x',
        Badge::Outline => ' ',
    };
    format!("({mark}) {column}")
}

/// Dashboard summary: headline metrics, then value by stage.
pub fn render_metrics(summary: &PipelineSummary) -> String {
    let win_rate = summary.win_rate.map_or_else(|| "n/a".to_owned(), |r| format!("{r:.0}%"));
    let mut out = String::new();
    out.push_str(&format!("Total RFP Value   {}\n", format_compact(summary.total_value)));
    out.push_str(&format!("Open Pipeline     {}\n", format_compact(summary.open_value)));
    out.push_str(&format!("Won Value         {}\n", format_compact(summary.won_value)));
    out.push_str(&format!("Success Rate      {win_rate}\n"));
    out.push_str(&format!("Active RFPs       {}\n\n", summary.active_count));
    for col in &summary.columns {
        out.push_str(&format!(
            "{:<12} {:>3}  {}\n",
            col.column.label(),
            col.count,
            format_currency(col.total_value)
        ));
    }
    out
}

/// Column regions, one per line, so a release point can be picked by hand.
pub fn render_regions(regions: &[ColumnRegion]) -> String {
    regions
        .iter()
        .map(|r| {
            let c = r.rect.center();
            format!(
                "{:<12} x {:>7.1}..{:<7.1} y {:>6.1}..{:<6.1} center ({:.1}, {:.1})\n",
                r.column.label(),
                r.rect.left,
                r.rect.right,
                r.rect.top,
                r.rect.bottom,
                c.x,
                c.y
            )
        })
        .collect()
}

/// Detail page of one proposal: overview, client, documents, activity.
pub fn render_detail(detail: &RfpDetail<'_>) -> String {
    let card = detail.card;
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", card.title, status_badge(card.column)));
    out.push_str(&format!("ID              {}\n", card.id));
    out.push_str(&format!("Client          {}\n", card.client));
    out.push_str(&format!("Proposal Value  {}\n", format_currency(card.value)));

    out.push_str("\nClient Information\n");
    match detail.client {
        Some(client) => {
            out.push_str(&format!("   {} ({})\n", client.name, client.id));
            out.push_str(&format!("   Primary Contact: {}\n", client.contact_person));
            out.push_str(&format!("   {} | {}\n", client.email, client.phone));
        }
        None => out.push_str(&format!("   {} (no client record)\n", card.client)),
    }

    out.push_str("\nDocuments\n");
    if detail.documents.is_empty() {
        out.push_str("   No documents\n");
    }
    for doc in &detail.documents {
        out.push_str(&format!("   {} ({})\n", doc.name, doc.size));
    }

    out.push_str("\nActivity & Notes\n");
    for entry in &detail.activity {
        out.push_str(&format!("   {}  {} {}\n", entry.timestamp, entry.user, entry.action));
    }
    out
}

/// The wizard frame: title, step indicator, and the navigation buttons.
pub fn render_wizard(wizard: &Wizard) -> String {
    let back = if wizard.is_first_step() { "" } else { "< Back  " };
    format!("{WIZARD_TITLE}\n{}\n{back}{} >\n", render_wizard_steps(wizard), wizard.forward_label())
}

/// Step indicator row of the wizard, e.g. `[x] Client Info -- [2] Proposal Details -- [ ] Review`.
pub fn render_wizard_steps(wizard: &Wizard) -> String {
    WizardStep::ALL
        .iter()
        .map(|step| {
            let marker = match wizard.step_status(step.index()) {
                StepStatus::Completed => "x".to_owned(),
                StepStatus::Active => (step.index() + 1).to_string(),
                StepStatus::Pending => " ".to_owned(),
            };
            format!("[{marker}] {}", step.name())
        })
        .collect::<Vec<_>>()
        .join(" -- ")
}
