//! Gated step transitions

use crate::error::{Error, Result};
use crate::types::Step;
use crate::wizard::WizardState;

/// Advance to the next stage, enforcing the per-step gates
///
/// - Contact requires full name, email, and phone to be non-blank.
/// - Preferences requires the disclaimer to be acknowledged.
/// - Medical and Nutrition advance unconditionally.
/// - Review has no forward motion here; [`super::submit`] is the only way
///   past it. Complete is terminal.
///
/// On a failed gate the error carries the user-facing message and the
/// caller's state is untouched.
pub fn advance(state: &WizardState) -> Result<WizardState> {
    let next = match state.step {
        Step::Contact => {
            let missing = state.record.missing_required();
            if !missing.is_empty() {
                let names = missing
                    .iter()
                    .map(|f| f.label().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(Error::MissingInformation(names));
            }
            Step::Medical
        }
        Step::Medical => Step::Nutrition,
        Step::Nutrition => Step::Preferences,
        Step::Preferences => {
            if !state.record.disclaimer {
                return Err(Error::DisclaimerRequired);
            }
            Step::Review
        }
        Step::Review => return Err(Error::SubmitRequired(state.step)),
        Step::Complete => return Err(Error::AlreadyComplete),
    };

    Ok(WizardState {
        step: next,
        record: state.record.clone(),
    })
}

/// Retreat to the previous stage
///
/// Unconditional; a no-op at Contact, which has no previous stage.
#[must_use]
pub fn retreat(state: &WizardState) -> WizardState {
    WizardState {
        step: state.step.previous().unwrap_or(state.step),
        record: state.record.clone(),
    }
}
