//! CLI screens
//!
//! Screen implementations for the `intake` binary.

mod answers;
mod style;
mod wizard;

pub use answers::run_answers;
pub use wizard::run_wizard;
