use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use super::{Dispatcher, ExecutionResult};
use crate::error::CoreResult;
use crate::platform::{Hotkey, MediaKey};

/// File name for a screenshot taken at `taken_at`.
pub fn screenshot_file_name(taken_at: NaiveDateTime) -> String {
    format!("screenshot_{}.png", taken_at.format("%Y%m%d_%H%M%S"))
}

impl Dispatcher {
    pub(super) fn press_media_key(&self, key: MediaKey) -> ExecutionResult {
        let message = match key {
            MediaKey::VolumeUp => "Volume increased",
            MediaKey::VolumeDown => "Volume decreased",
            MediaKey::Mute => "Volume muted/unmuted",
        };
        match self.platform.press_key(key) {
            Ok(()) => ExecutionResult::ok(message),
            Err(error) => ExecutionResult::failed(format!("Volume control failed: {error}")),
        }
    }

    pub(super) fn screenshot(&self) -> ExecutionResult {
        match self.capture_screenshot() {
            Ok(path) => ExecutionResult::ok(format!("Screenshot saved to {}", path.display())),
            Err(error) => ExecutionResult::failed(format!("Screenshot failed: {error}")),
        }
    }

    fn capture_screenshot(&self) -> CoreResult<PathBuf> {
        std::fs::create_dir_all(&self.screenshot_dir)?;
        let path = self
            .screenshot_dir
            .join(screenshot_file_name(Local::now().naive_local()));
        self.platform.capture_screenshot(&path)?;
        Ok(path)
    }

    pub(super) fn lock(&self) -> ExecutionResult {
        match self.platform.lock_screen() {
            Ok(()) => ExecutionResult::ok("Locking computer"),
            Err(error) => ExecutionResult::failed(format!("Failed to lock: {error}")),
        }
    }

    pub(super) fn send_hotkey(&self, hotkey: Hotkey) -> ExecutionResult {
        let message = match hotkey {
            Hotkey::ShowDesktop => "Showing desktop",
            Hotkey::TaskView => "Opening Task View",
            Hotkey::SwitchWindow => "Switching window",
        };
        match self.platform.send_hotkey(hotkey) {
            Ok(()) => ExecutionResult::ok(message),
            Err(error) => ExecutionResult::failed(format!("Failed: {error}")),
        }
    }
}
