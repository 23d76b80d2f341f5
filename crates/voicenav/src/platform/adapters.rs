use std::path::Path;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};

use super::types::{Hotkey, MediaKey, RunningProcess};

/// Host operating-system effects used by the dispatcher.
///
/// Every method defaults to [`CoreError::NotImplemented`] so adapters only
/// provide what their host supports.
pub trait Platform: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// Start a program without waiting for it.
    fn launch(&self, _command: &str) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }

    fn list_processes(&self) -> CoreResult<Vec<RunningProcess>> {
        Err(CoreError::NotImplemented)
    }
    /// Ask a process to exit. A process that is already gone is not an error.
    fn terminate_process(&self, _pid: u32) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }

    fn open_path(&self, _path: &Path) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }
    fn open_url(&self, _url: &str) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }

    fn press_key(&self, _key: MediaKey) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }
    fn send_hotkey(&self, _hotkey: Hotkey) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }

    fn capture_screenshot(&self, _output_path: &Path) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }
    fn lock_screen(&self) -> CoreResult<()> {
        Err(CoreError::NotImplemented)
    }
}

pub type SharedPlatform = Arc<dyn Platform>;

pub mod portable;
pub mod recording;
