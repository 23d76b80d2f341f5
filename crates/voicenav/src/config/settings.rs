use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";
pub const DEFAULT_WAKE_WORD: &str = "hey computer";

/// Runtime settings, as stored in `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `create folder` puts new folders. Defaults to the Downloads directory.
    pub folder_base_dir: Option<PathBuf>,
    /// Where screenshots are saved. Defaults to Pictures/Screenshots.
    pub screenshot_dir: Option<PathBuf>,
    /// Prefix the URL-encoded query is appended to.
    pub search_url: String,
    pub wake_word_enabled: bool,
    pub wake_word: String,
    pub exit_phrases: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_base_dir: None,
            screenshot_dir: None,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            wake_word_enabled: false,
            wake_word: DEFAULT_WAKE_WORD.to_string(),
            exit_phrases: ["stop listening", "exit", "quit", "goodbye"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    pub fn resolved_folder_base_dir(&self) -> PathBuf {
        self.folder_base_dir.clone().unwrap_or_else(|| {
            dirs::download_dir().unwrap_or_else(|| home_dir().join("Downloads"))
        })
    }

    pub fn resolved_screenshot_dir(&self) -> PathBuf {
        self.screenshot_dir.clone().unwrap_or_else(|| {
            dirs::picture_dir()
                .unwrap_or_else(|| home_dir().join("Pictures"))
                .join("Screenshots")
        })
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Read and parse a `settings.json` file.
pub fn load_settings(path: &Path) -> CoreResult<Settings> {
    let data = std::fs::read_to_string(path).map_err(|error| {
        CoreError::Config(format!("failed to read settings {}: {error}", path.display()))
    })?;
    serde_json::from_str(&data).map_err(|error| {
        CoreError::Config(format!("failed to parse settings {}: {error}", path.display()))
    })
}
