use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningProcess {
    pub pid: u32,
    pub name: String,
}

/// Media keys the dispatcher can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKey {
    VolumeUp,
    VolumeDown,
    Mute,
}

/// Desktop key chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hotkey {
    /// Minimize every window (Win+D and friends).
    ShowDesktop,
    /// Task view / Mission Control.
    TaskView,
    /// Alt+Tab.
    SwitchWindow,
}
