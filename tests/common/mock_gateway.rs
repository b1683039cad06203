//! Mock submission gateway for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use fit_intake::error::{Error, Result};
use fit_intake::gateway::SubmissionGateway;
use fit_intake::types::{DeliveryReceipt, EmailMessage};
use std::sync::Mutex;

/// Deterministic gateway double with call tracking and error injection
///
/// Replaces the timer-based simulated gateway in tests so both the success
/// and the failure path can be driven without real delays.
pub struct MockGateway {
    sent: Mutex<Vec<EmailMessage>>,
    error_on_send: Mutex<Option<String>>,
}

impl MockGateway {
    /// Create a mock that accepts every message
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            error_on_send: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `send` return an error
    pub fn fail_send(&self, msg: &str) {
        *self.error_on_send.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `send` succeed again
    pub fn recover(&self) {
        *self.error_on_send.lock().unwrap() = None;
    }

    // === Call verification methods ===

    /// Every message handed to `send`, including failed attempts
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of `send` calls observed
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Assert exactly one message was sent and return it
    pub fn single_message(&self) -> EmailMessage {
        let sent = self.sent_messages();
        assert_eq!(sent.len(), 1, "expected exactly one send, got {}", sent.len());
        sent.into_iter().next().unwrap()
    }

    /// Assert `send` was never invoked
    pub fn assert_nothing_sent(&self) {
        let sent = self.sent_messages();
        assert!(sent.is_empty(), "expected no sends but got: {sent:?}");
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for MockGateway {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt> {
        self.sent.lock().unwrap().push(message.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_send.lock().unwrap().as_ref() {
            return Err(Error::Gateway(msg.clone()));
        }

        Ok(DeliveryReceipt {
            accepted_at: Utc::now(),
        })
    }
}
