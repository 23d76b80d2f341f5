//! Safety taxonomy: which actions may run without a human in the loop.

pub mod risk;

pub use risk::{requires_confirmation, risk_for_action, RiskLevel};
