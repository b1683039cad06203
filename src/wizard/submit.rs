//! Guarded terminal submission

use crate::error::{Error, Result};
use crate::gateway::SubmissionGateway;
use crate::render::render_message;
use crate::types::{Step, SubmissionOptions};
use crate::wizard::WizardState;

/// Submit the finished form from the Review stage
///
/// Re-checks the consent flag even though the Preferences gate already did;
/// a rearranged flow could reach Review without it, so the invariant is
/// enforced here too. The gateway result is awaited: the cursor moves to
/// Complete only on success, and on failure the error surfaces while the
/// caller's state (and record) stay on Review for a retry.
pub async fn submit(
    state: &WizardState,
    gateway: &dyn SubmissionGateway,
    opts: &SubmissionOptions,
) -> Result<WizardState> {
    if state.step != Step::Review {
        return Err(Error::NotAtReview(state.step));
    }
    if !state.record.disclaimer {
        return Err(Error::DisclaimerRequired);
    }

    let message = render_message(&state.record, opts);
    tracing::debug!(to = %message.to, "submitting intake form");

    match gateway.send(&message).await {
        Ok(receipt) => {
            tracing::info!(accepted_at = %receipt.accepted_at, "intake form delivered");
            Ok(WizardState {
                step: Step::Complete,
                record: state.record.clone(),
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "intake form delivery failed");
            Err(Error::SubmissionFailed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeliveryReceipt, EmailMessage, Field};
    use async_trait::async_trait;
    use chrono::Utc;

    struct AcceptingGateway;

    #[async_trait]
    impl SubmissionGateway for AcceptingGateway {
        async fn send(&self, _message: &EmailMessage) -> Result<DeliveryReceipt> {
            Ok(DeliveryReceipt {
                accepted_at: Utc::now(),
            })
        }
    }

    fn review_state() -> WizardState {
        let mut state = WizardState::new();
        state.step = Step::Review;
        state.edit(Field::FullName, "Jane Doe");
        state.edit(Field::Email, "jane@example.com");
        state.edit(Field::Phone, "555-0100");
        state.toggle_consent(true);
        state
    }

    #[tokio::test]
    async fn test_submit_rejected_outside_review() {
        let mut state = review_state();
        state.step = Step::Preferences;

        let err = submit(&state, &AcceptingGateway, &SubmissionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotAtReview(Step::Preferences)));
    }

    #[tokio::test]
    async fn test_submit_recheck_consent_at_review() {
        let mut state = review_state();
        state.toggle_consent(false);

        let err = submit(&state, &AcceptingGateway, &SubmissionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DisclaimerRequired));
    }

    #[tokio::test]
    async fn test_submit_completes_on_gateway_success() {
        let state = review_state();
        let done = submit(&state, &AcceptingGateway, &SubmissionOptions::default())
            .await
            .unwrap();
        assert_eq!(done.step, Step::Complete);
        assert_eq!(done.record, state.record);
    }
}
