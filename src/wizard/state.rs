//! Wizard state: the step cursor plus the intake record

use crate::types::{Attachment, Field, IntakeRecord, Step};

/// The complete wizard session state
///
/// Created empty at wizard start and discarded at the terminal stage. The
/// record is only ever mutated through these methods in response to discrete
/// field-edit or file-select events; no field is derived from another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Current stage cursor
    pub step: Step,
    /// The intake record being filled in
    pub record: IntakeRecord,
}

impl WizardState {
    /// Start a fresh session at the Contact stage with an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a prefilled record (the `--answers` path), still at the
    /// Contact stage so every gate runs in order
    #[must_use]
    pub fn with_record(record: IntakeRecord) -> Self {
        Self {
            step: Step::Contact,
            record,
        }
    }

    /// Overwrite a named field. Never fails.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Overwrite the consent flag. Never fails.
    pub const fn toggle_consent(&mut self, checked: bool) {
        self.record.set_disclaimer(checked);
    }

    /// Overwrite the photo attachment with a newly chosen file. Never fails.
    pub fn select_photo(&mut self, photo: Attachment) {
        self.record.set_photo(photo);
    }

    /// Progress through the interactive steps as a percentage, matching the
    /// on-screen progress bar
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let done = u16::from(self.step.number().saturating_sub(1));
        let total = u16::from(Step::INTERACTIVE_STEPS);
        u8::try_from((done.min(total) * 100) / total).unwrap_or(100)
    }
}
