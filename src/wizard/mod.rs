//! Wizard controller
//!
//! Owns the step cursor and the intake record, and enforces per-step gating:
//! 1. State - the owned record + cursor pair
//! 2. Transitions - pure `advance` / `retreat` over that state
//! 3. Submission - the guarded terminal action against the gateway
//!
//! Transition functions take state by reference and return new state, so a
//! failed guard leaves the caller's state untouched and the machine can be
//! unit-tested without any rendering layer.

mod state;
mod submit;
mod transition;

pub use state::WizardState;
pub use submit::submit;
pub use transition::{advance, retreat};
