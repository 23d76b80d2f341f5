use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Command vocabulary: application and folder registries plus the phrase
/// catalog, as stored in `commands.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Application name -> launch command or path. May contain `{username}`.
    #[serde(default)]
    pub applications: HashMap<String, String>,
    /// Folder shortcut name -> path. May contain `{username}`.
    #[serde(default)]
    pub folder_shortcuts: HashMap<String, String>,
    #[serde(default)]
    pub command_patterns: CommandPatterns,
}

/// Templates and trigger phrases, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandPatterns {
    pub open_app: Vec<String>,
    pub close_app: Vec<String>,
    pub file_operations: FileOperationPatterns,
    pub system_controls: SystemControlTriggers,
    pub web: WebPatterns,
    pub shortcuts: ShortcutTriggers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOperationPatterns {
    pub create_folder: Vec<String>,
    pub open_folder: Vec<String>,
    pub delete: Vec<String>,
}

/// Literal phrases; a control fires when any phrase occurs in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemControlTriggers {
    pub volume_up: Vec<String>,
    pub volume_down: Vec<String>,
    pub mute: Vec<String>,
    pub screenshot: Vec<String>,
    pub lock: Vec<String>,
    pub shutdown: Vec<String>,
    pub restart: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPatterns {
    pub search: Vec<String>,
    pub open_url: Vec<String>,
}

/// Literal phrases for keyboard-shortcut commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutTriggers {
    pub minimize_all: Vec<String>,
    pub task_view: Vec<String>,
    pub switch_window: Vec<String>,
}

const BUILTIN_COMMANDS: &str = include_str!("default_commands.json");

impl Default for CommandConfig {
    /// The built-in vocabulary shipped with the crate.
    fn default() -> Self {
        serde_json::from_str(BUILTIN_COMMANDS).expect("builtin commands JSON must be valid")
    }
}

impl CommandConfig {
    pub fn from_json(data: &str) -> CoreResult<Self> {
        serde_json::from_str(data)
            .map_err(|error| CoreError::Config(format!("failed to parse command config: {error}")))
    }
}

/// Read and parse a `commands.json` file.
pub fn load_command_config(path: &Path) -> CoreResult<CommandConfig> {
    let data = std::fs::read_to_string(path).map_err(|error| {
        CoreError::Config(format!(
            "failed to read command config {}: {error}",
            path.display()
        ))
    })?;
    serde_json::from_str(&data).map_err(|error| {
        CoreError::Config(format!(
            "failed to parse command config {}: {error}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_has_every_category() {
        let config = CommandConfig::default();
        let patterns = &config.command_patterns;
        assert!(!patterns.open_app.is_empty());
        assert!(!patterns.close_app.is_empty());
        assert!(!patterns.file_operations.create_folder.is_empty());
        assert!(!patterns.file_operations.open_folder.is_empty());
        assert!(!patterns.file_operations.delete.is_empty());
        assert!(!patterns.system_controls.restart.is_empty());
        assert!(!patterns.web.search.is_empty());
        assert!(!patterns.web.open_url.is_empty());
        assert!(!patterns.shortcuts.switch_window.is_empty());
        assert!(config.applications.contains_key("chrome"));
        assert!(config.folder_shortcuts.contains_key("downloads"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = CommandConfig::from_json(
            r#"{ "applications": { "chrome": "chrome.exe" },
                 "command_patterns": { "open_app": ["open {app}"] } }"#,
        )
        .unwrap();
        assert_eq!(config.command_patterns.open_app, vec!["open {app}"]);
        assert!(config.command_patterns.close_app.is_empty());
        assert!(config.command_patterns.system_controls.mute.is_empty());
        assert!(config.folder_shortcuts.is_empty());
    }

    #[test]
    fn load_reports_path_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        let error = load_command_config(&path).expect_err("missing file should fail");
        match error {
            CoreError::Config(message) => {
                assert!(message.contains("commands.json"), "unexpected message: {message}")
            }
            other => panic!("expected config error, got: {other:?}"),
        }
    }

    #[test]
    fn load_reports_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        std::fs::write(&path, "{ not json").unwrap();
        let error = load_command_config(&path).expect_err("bad json should fail");
        assert!(matches!(error, CoreError::Config(message) if message.contains("failed to parse")));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commands.json");
        std::fs::write(
            &path,
            r#"{ "command_patterns": { "shortcuts": { "task_view": ["task view"] } } }"#,
        )
        .unwrap();
        let config = load_command_config(&path).unwrap();
        assert_eq!(config.command_patterns.shortcuts.task_view, vec!["task view"]);
    }
}
