//! Simulated email gateway
//!
//! Stands in for a real email-sending backend (SendGrid, Mailgun, or an
//! in-house service). Logs the payload, waits a fixed delay, and resolves
//! success.

use crate::error::Result;
use crate::gateway::SubmissionGateway;
use crate::types::{DeliveryReceipt, EmailMessage};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Delay the simulated backend takes to accept a message
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Always-succeeding gateway with a fixed simulated network delay
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway with the default 1.5 s delay
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Create a gateway with a custom delay
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt> {
        match serde_json::to_string(message) {
            Ok(payload) => tracing::debug!(%payload, "sending intake form"),
            Err(e) => tracing::warn!(error = %e, "could not serialize payload for logging"),
        }

        tokio::time::sleep(self.delay).await;

        tracing::info!(to = %message.to, subject = %message.subject, "intake form accepted");
        Ok(DeliveryReceipt {
            accepted_at: Utc::now(),
        })
    }
}
