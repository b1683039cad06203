//! Submission gateway
//!
//! The external collaborator that delivers a finished intake form, e.g. an
//! email-sending backend. Abstracted behind a trait so the wizard can be
//! driven with deterministic success/failure doubles in tests.

mod simulated;

pub use simulated::SimulatedGateway;

use crate::error::Result;
use crate::types::{DeliveryReceipt, EmailMessage};
use async_trait::async_trait;

/// Gateway trait for delivering a completed intake form
///
/// Implementations resolve asynchronously after bounded latency. Cancellation
/// is not supported; once `send` is invoked it runs to completion.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver the message, resolving to a receipt on success
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt>;
}
