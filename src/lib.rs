//! fit-intake - multi-step client intake questionnaire
//!
//! Collects personal, medical, nutrition, and preference data from a
//! prospective coaching client across a sequence of screens, validates the
//! required fields at each gate, and hands the finished record to a
//! submission gateway.
//!
//! The library holds everything with behavior: the wizard state machine,
//! the gateway seam, rendering, and the print-mode toggle. The `intake`
//! binary layers the interactive terminal screens on top.

pub mod error;
pub mod gateway;
pub mod print;
pub mod render;
pub mod types;
pub mod wizard;
