//! New-RFP wizard: a linear, three-step form that produces a card.
//!
//! The wizard only tracks which step is active and the text entered so far.
//! Each step's fields are checked when leaving it forward; `finish` re-checks
//! everything and builds the card. Checks are presence and number-format only.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::consts::{WIZARD_FINISH_TEXT, WIZARD_NEXT_TEXT, WIZARD_STEPS};
use crate::doc::{Card, CardId, Column};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("proposal value must be a non-negative number, got {0:?}")]
    InvalidValue(String),
    #[error("the wizard can only finish from the last step")]
    NotOnLastStep,
}

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ClientInfo,
    ProposalDetails,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::ClientInfo, Self::ProposalDetails, Self::Review];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::ClientInfo => 0,
            Self::ProposalDetails => 1,
            Self::Review => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        WIZARD_STEPS[self.index()]
    }
}

/// How a step indicator is drawn relative to the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Raw text entered into the wizard's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RfpDraft {
    pub client_name: String,
    /// Optional; kept for the review step only.
    pub contact_person: String,
    pub title: String,
    pub value: String,
}

impl RfpDraft {
    fn check_client_info(&self) -> Result<(), WizardError> {
        required(&self.client_name, "client name").map(|_| ())
    }

    fn check_proposal_details(&self) -> Result<f64, WizardError> {
        required(&self.title, "RFP title")?;
        let raw = required(&self.value, "proposal value")?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(WizardError::InvalidValue(raw.to_owned())),
        }
    }
}

fn required<'a>(text: &'a str, field: &'static str) -> Result<&'a str, WizardError> {
    let trimmed = text.trim();
    if trimmed.is_empty() { Err(WizardError::MissingField(field)) } else { Ok(trimmed) }
}

/// Wizard state: the active step plus the draft being filled in.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    current: usize,
    pub draft: RfpDraft,
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current == WizardStep::ALL.len() - 1
    }

    /// Text of the forward button: "Next", or the finish label on the last step.
    #[must_use]
    pub fn forward_label(&self) -> &'static str {
        if self.is_last_step() { WIZARD_FINISH_TEXT } else { WIZARD_NEXT_TEXT }
    }

    /// Status of the step at `index` relative to the active one.
    #[must_use]
    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Validate the active step and move forward. Stays put on the last step.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.current_step() {
            WizardStep::ClientInfo => self.draft.check_client_info()?,
            WizardStep::ProposalDetails => {
                self.draft.check_proposal_details()?;
            }
            WizardStep::Review => return Ok(WizardStep::Review),
        }
        self.current += 1;
        Ok(self.current_step())
    }

    /// Move back one step. Stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    /// Build the new card. The card always starts in [`Column::New`].
    pub fn finish(&self) -> Result<Card, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotOnLastStep);
        }
        self.draft.check_client_info()?;
        let value = self.draft.check_proposal_details()?;
        Ok(Card {
            id: CardId::generate(),
            title: self.draft.title.trim().to_owned(),
            client: self.draft.client_name.trim().to_owned(),
            value,
            column: Column::New,
        })
    }
}
