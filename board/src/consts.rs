//! Shared constants for the board crate.

// ── Layout ──────────────────────────────────────────────────────

/// Gap between adjacent columns, in CSS pixels.
pub const COLUMN_GAP_PX: f64 = 16.0;

/// Padding around the whole board, in CSS pixels.
pub const BOARD_PADDING_PX: f64 = 16.0;

// ── Wizard ──────────────────────────────────────────────────────

/// Step names of the new-RFP wizard, in order.
pub const WIZARD_STEPS: [&str; 3] = ["Client Info", "Proposal Details", "Review"];

/// Title shown above the new-RFP wizard.
pub const WIZARD_TITLE: &str = "Create New RFP";

/// Label of the forward button on every step but the last.
pub const WIZARD_NEXT_TEXT: &str = "Next";

/// Label of the forward button on the last step, which completes the wizard.
pub const WIZARD_FINISH_TEXT: &str = "Create RFP";

// ── Clients ─────────────────────────────────────────────────────

/// Minimum length of a client's name and of its contact person's name.
pub const CLIENT_MIN_NAME_CHARS: usize = 2;

/// Minimum length of a client phone number, separators included.
pub const CLIENT_MIN_PHONE_CHARS: usize = 10;
