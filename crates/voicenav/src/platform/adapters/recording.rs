use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::Platform;
use crate::error::{CoreError, CoreResult};
use crate::platform::types::{Hotkey, MediaKey, RunningProcess};

/// One call made against a [`RecordingPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Launch(String),
    ListProcesses,
    TerminateProcess(u32),
    OpenPath(PathBuf),
    OpenUrl(String),
    PressKey(MediaKey),
    SendHotkey(Hotkey),
    CaptureScreenshot(PathBuf),
    LockScreen,
}

/// Records every call instead of touching the host.
///
/// Serves dry runs and tests. A fixed process table answers
/// `list_processes`, and `failing` makes every call return an error after
/// it has been recorded.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    processes: Vec<RunningProcess>,
    failure: Option<String>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processes(processes: Vec<RunningProcess>) -> Self {
        Self {
            processes,
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Snapshot of the calls made so far, oldest first.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<PlatformCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: PlatformCall) -> CoreResult<()> {
        self.lock_calls().push(call);
        match &self.failure {
            Some(message) => Err(CoreError::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

impl Platform for RecordingPlatform {
    fn id(&self) -> &str {
        "recording"
    }

    fn launch(&self, command: &str) -> CoreResult<()> {
        self.record(PlatformCall::Launch(command.to_string()))
    }

    fn list_processes(&self) -> CoreResult<Vec<RunningProcess>> {
        self.record(PlatformCall::ListProcesses)?;
        Ok(self.processes.clone())
    }

    fn terminate_process(&self, pid: u32) -> CoreResult<()> {
        self.record(PlatformCall::TerminateProcess(pid))
    }

    fn open_path(&self, path: &Path) -> CoreResult<()> {
        self.record(PlatformCall::OpenPath(path.to_path_buf()))
    }

    fn open_url(&self, url: &str) -> CoreResult<()> {
        self.record(PlatformCall::OpenUrl(url.to_string()))
    }

    fn press_key(&self, key: MediaKey) -> CoreResult<()> {
        self.record(PlatformCall::PressKey(key))
    }

    fn send_hotkey(&self, hotkey: Hotkey) -> CoreResult<()> {
        self.record(PlatformCall::SendHotkey(hotkey))
    }

    fn capture_screenshot(&self, output_path: &Path) -> CoreResult<()> {
        self.record(PlatformCall::CaptureScreenshot(output_path.to_path_buf()))
    }

    fn lock_screen(&self) -> CoreResult<()> {
        self.record(PlatformCall::LockScreen)
    }
}
