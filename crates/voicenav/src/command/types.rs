use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::permissions::{requires_confirmation, risk_for_action};

/// Every action the dispatcher knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenApp { app: String },
    CloseApp { app: String },
    CreateFolder { name: String },
    OpenFolder { path: String },
    Delete { target: String },
    VolumeUp,
    VolumeDown,
    Mute,
    Screenshot,
    Lock,
    Shutdown,
    Restart,
    WebSearch { query: String },
    OpenUrl { url: String },
    MinimizeAll,
    TaskView,
    SwitchWindow,
}

impl Action {
    /// Stable string tag for this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::OpenApp { .. } => "open_app",
            Action::CloseApp { .. } => "close_app",
            Action::CreateFolder { .. } => "create_folder",
            Action::OpenFolder { .. } => "open_folder",
            Action::Delete { .. } => "delete",
            Action::VolumeUp => "system_volume_up",
            Action::VolumeDown => "system_volume_down",
            Action::Mute => "system_mute",
            Action::Screenshot => "system_screenshot",
            Action::Lock => "system_lock",
            Action::Shutdown => "system_shutdown",
            Action::Restart => "system_restart",
            Action::WebSearch { .. } => "web_search",
            Action::OpenUrl { .. } => "open_url",
            Action::MinimizeAll => "shortcut_minimize_all",
            Action::TaskView => "shortcut_task_view",
            Action::SwitchWindow => "shortcut_switch_window",
        }
    }

    /// Extracted parameters as a name -> value map.
    pub fn parameters(&self) -> BTreeMap<String, String> {
        let pair = match self {
            Action::OpenApp { app } | Action::CloseApp { app } => Some(("app", app)),
            Action::CreateFolder { name } => Some(("name", name)),
            Action::OpenFolder { path } => Some(("path", path)),
            Action::Delete { target } => Some(("target", target)),
            Action::WebSearch { query } => Some(("query", query)),
            Action::OpenUrl { url } => Some(("url", url)),
            Action::VolumeUp
            | Action::VolumeDown
            | Action::Mute
            | Action::Screenshot
            | Action::Lock
            | Action::Shutdown
            | Action::Restart
            | Action::MinimizeAll
            | Action::TaskView
            | Action::SwitchWindow => None,
        };
        pair.into_iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Rebuild an action from its tag and parameters.
    pub fn from_parts(tag: &str, parameters: &BTreeMap<String, String>) -> CoreResult<Self> {
        let param = |key: &str| {
            parameters.get(key).cloned().ok_or_else(|| {
                CoreError::InvalidInput(format!("action '{tag}' is missing parameter '{key}'"))
            })
        };

        let action = match tag {
            "open_app" => Action::OpenApp { app: param("app")? },
            "close_app" => Action::CloseApp { app: param("app")? },
            "create_folder" => Action::CreateFolder { name: param("name")? },
            "open_folder" => Action::OpenFolder { path: param("path")? },
            "delete" => Action::Delete { target: param("target")? },
            "system_volume_up" => Action::VolumeUp,
            "system_volume_down" => Action::VolumeDown,
            "system_mute" => Action::Mute,
            "system_screenshot" => Action::Screenshot,
            "system_lock" => Action::Lock,
            "system_shutdown" => Action::Shutdown,
            "system_restart" => Action::Restart,
            "web_search" => Action::WebSearch { query: param("query")? },
            "open_url" => Action::OpenUrl { url: param("url")? },
            "shortcut_minimize_all" => Action::MinimizeAll,
            "shortcut_task_view" => Action::TaskView,
            "shortcut_switch_window" => Action::SwitchWindow,
            other => return Err(CoreError::UnknownAction(other.to_string())),
        };
        Ok(action)
    }
}

/// A recognized command, produced by the intent parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: Action,
    requires_confirmation: bool,
}

impl Command {
    /// Build a command; the confirmation flag follows the action's risk level.
    pub fn new(action: Action) -> Self {
        let requires_confirmation = requires_confirmation(&risk_for_action(&action));
        Self {
            action,
            requires_confirmation,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn tag(&self) -> &'static str {
        self.action.tag()
    }

    pub fn parameters(&self) -> BTreeMap<String, String> {
        self.action.parameters()
    }

    pub fn requires_confirmation(&self) -> bool {
        self.requires_confirmation
    }

    pub fn to_record(&self) -> CommandRecord {
        CommandRecord {
            action: self.tag().to_string(),
            parameters: self.parameters(),
            requires_confirmation: self.requires_confirmation,
        }
    }
}

/// Serializable, string-tagged form of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub action: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub requires_confirmation: bool,
}

impl TryFrom<&CommandRecord> for Command {
    type Error = CoreError;

    /// The record's own flag can only tighten the gate, never loosen it.
    fn try_from(record: &CommandRecord) -> CoreResult<Self> {
        let action = Action::from_parts(&record.action, &record.parameters)?;
        let mut command = Command::new(action);
        command.requires_confirmation |= record.requires_confirmation;
        Ok(command)
    }
}
