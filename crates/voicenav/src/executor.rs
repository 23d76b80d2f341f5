//! Command dispatch.
//!
//! The [`Dispatcher`] applies the confirmation gate, routes each action to
//! its handler and turns every handler fault into a failed
//! [`ExecutionResult`]. Nothing here returns an error to the caller.

mod apps;
mod files;
mod result;
mod system;
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use crate::command::{Action, Command, CommandRecord};
use crate::config::{LookupTables, Settings};
use crate::error::CoreError;
use crate::platform::{Hotkey, MediaKey, SharedPlatform};

pub use files::expand_path;
pub use result::ExecutionResult;
pub use system::screenshot_file_name;

pub const NO_COMMAND_MESSAGE: &str = "No command provided";

/// Message returned when a gated command is refused.
pub fn confirmation_notice(tag: &str) -> String {
    match tag {
        "delete" => "Delete operation requires manual confirmation".to_string(),
        "system_shutdown" => "Shutdown requires manual confirmation".to_string(),
        "system_restart" => "Restart requires manual confirmation".to_string(),
        other => format!("{other} requires manual confirmation"),
    }
}

pub struct Dispatcher {
    platform: SharedPlatform,
    tables: Arc<LookupTables>,
    folder_base_dir: PathBuf,
    screenshot_dir: PathBuf,
    search_url: String,
}

impl Dispatcher {
    pub fn new(platform: SharedPlatform, tables: Arc<LookupTables>, settings: &Settings) -> Self {
        Self {
            platform,
            tables,
            folder_base_dir: settings.resolved_folder_base_dir(),
            screenshot_dir: settings.resolved_screenshot_dir(),
            search_url: settings.search_url.clone(),
        }
    }

    pub fn platform(&self) -> &SharedPlatform {
        &self.platform
    }

    /// Run `command` unless it is absent or gated.
    ///
    /// A command with `requires_confirmation` set never reaches a handler.
    pub fn execute(&self, command: Option<&Command>) -> ExecutionResult {
        let Some(command) = command else {
            tracing::warn!("execute called without a command");
            return ExecutionResult::failed(NO_COMMAND_MESSAGE);
        };

        if command.requires_confirmation() {
            tracing::warn!(action = command.tag(), "command requires confirmation, not executed");
            return ExecutionResult::failed(confirmation_notice(command.tag()));
        }

        tracing::info!(action = command.tag(), platform = self.platform.id(), "executing command");
        let result = self.dispatch(command.action());
        if result.success {
            tracing::info!(action = command.tag(), "{}", result.message);
        } else {
            tracing::warn!(action = command.tag(), "{}", result.message);
        }
        result
    }

    /// String-tagged entry point for commands that arrive as records.
    pub fn execute_record(&self, record: Option<&CommandRecord>) -> ExecutionResult {
        let Some(record) = record else {
            tracing::warn!("execute_record called without a record");
            return ExecutionResult::failed(NO_COMMAND_MESSAGE);
        };

        if record.requires_confirmation {
            tracing::warn!(action = %record.action, "record requires confirmation, not executed");
            return ExecutionResult::failed(confirmation_notice(&record.action));
        }

        match Command::try_from(record) {
            Ok(command) => self.execute(Some(&command)),
            Err(CoreError::UnknownAction(tag)) => {
                tracing::warn!(action = %tag, "unknown action");
                ExecutionResult::failed(format!("Unknown action: {tag}"))
            }
            Err(error) => {
                tracing::warn!(action = %record.action, "rejected record: {error}");
                ExecutionResult::failed(format!("Invalid command: {error}"))
            }
        }
    }

    fn dispatch(&self, action: &Action) -> ExecutionResult {
        match action {
            Action::OpenApp { app } => self.open_app(app),
            Action::CloseApp { app } => self.close_app(app),
            Action::CreateFolder { name } => self.create_folder(name),
            Action::OpenFolder { path } => self.open_folder(path),
            Action::VolumeUp => self.press_media_key(MediaKey::VolumeUp),
            Action::VolumeDown => self.press_media_key(MediaKey::VolumeDown),
            Action::Mute => self.press_media_key(MediaKey::Mute),
            Action::Screenshot => self.screenshot(),
            Action::Lock => self.lock(),
            Action::WebSearch { query } => self.web_search(query),
            Action::OpenUrl { url } => self.open_url(url),
            Action::MinimizeAll => self.send_hotkey(Hotkey::ShowDesktop),
            Action::TaskView => self.send_hotkey(Hotkey::TaskView),
            Action::SwitchWindow => self.send_hotkey(Hotkey::SwitchWindow),
            // Always gated; no handler exists for these.
            Action::Delete { .. } | Action::Shutdown | Action::Restart => {
                ExecutionResult::failed(confirmation_notice(action.tag()))
            }
        }
    }
}
