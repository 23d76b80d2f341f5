//! Mapping from actions to risk levels.

use serde::{Deserialize, Serialize};

use crate::command::Action;

/// Risk classification for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Safe to execute automatically.
    Safe,
    /// Requires user confirmation before execution.
    Confirm,
    /// Destructive or irreversible; never executed automatically.
    Destructive,
}

/// Classify an action.
pub fn risk_for_action(action: &Action) -> RiskLevel {
    match action {
        Action::Delete { .. } | Action::Shutdown | Action::Restart => RiskLevel::Destructive,
        Action::OpenApp { .. }
        | Action::CloseApp { .. }
        | Action::CreateFolder { .. }
        | Action::OpenFolder { .. }
        | Action::VolumeUp
        | Action::VolumeDown
        | Action::Mute
        | Action::Screenshot
        | Action::Lock
        | Action::WebSearch { .. }
        | Action::OpenUrl { .. }
        | Action::MinimizeAll
        | Action::TaskView
        | Action::SwitchWindow => RiskLevel::Safe,
    }
}

/// Whether this risk level requires user confirmation before execution.
pub fn requires_confirmation(risk_level: &RiskLevel) -> bool {
    match risk_level {
        RiskLevel::Safe => false,
        RiskLevel::Confirm | RiskLevel::Destructive => true,
    }
}
