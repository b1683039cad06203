//! Error types for fit-intake
//!
//! Every variant is user-facing and locally recovered: validation and
//! submission failures block a transition and leave the wizard state and
//! record untouched. Nothing here is fatal.

use crate::types::Step;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All fit-intake errors
#[derive(Debug, Error)]
pub enum Error {
    /// Required contact fields are missing at the Contact gate
    #[error("Missing information: please fill in {0}")]
    MissingInformation(String),

    /// The disclaimer has not been acknowledged at a consent gate
    #[error("Disclaimer Required: please acknowledge the disclaimer to continue")]
    DisclaimerRequired,

    /// The submission gateway reported failure
    #[error("Submission Failed: {0}. Please try again.")]
    SubmissionFailed(String),

    /// `advance` was called from Review, whose only forward motion is `submit`
    #[error("cannot advance from {0}; submit the form instead")]
    SubmitRequired(Step),

    /// A forward action was requested from the terminal stage
    #[error("the form is already complete")]
    AlreadyComplete,

    /// `submit` was called from a stage other than Review
    #[error("cannot submit from {0}; review the form first")]
    NotAtReview(Step),

    /// Transport-level error reported by a submission gateway
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The answers file could not be parsed
    #[error("invalid answers file: {0}")]
    InvalidAnswers(#[from] serde_json::Error),

    /// Terminal prompt error
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}
