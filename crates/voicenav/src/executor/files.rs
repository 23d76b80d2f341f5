use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Dispatcher, ExecutionResult};
use crate::error::{CoreError, CoreResult};

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)\}|\$(\w+)|%(\w+)%").expect("env var pattern must be valid")
});

impl Dispatcher {
    /// Creates `name` under the folder base directory. Existing folders are
    /// left alone, so repeating the command succeeds.
    pub(super) fn create_folder(&self, name: &str) -> ExecutionResult {
        if let Err(error) = validate_folder_name(name) {
            return ExecutionResult::failed(format!("Failed to create folder: {error}"));
        }

        let path = self.folder_base_dir.join(name);
        match std::fs::create_dir_all(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "created folder");
                ExecutionResult::ok(format!("Created folder: {name}"))
            }
            Err(error) => ExecutionResult::failed(format!("Failed to create folder: {error}")),
        }
    }

    pub(super) fn open_folder(&self, path: &str) -> ExecutionResult {
        let resolved = match existing_folder(path) {
            Ok(resolved) => resolved,
            Err(CoreError::PathNotFound(_)) => {
                return ExecutionResult::failed(format!("Folder not found: {path}"));
            }
            Err(error) => return ExecutionResult::failed(format!("Failed to open folder: {error}")),
        };

        match self.platform.open_path(&resolved) {
            Ok(()) => ExecutionResult::ok("Opening folder"),
            Err(error) => ExecutionResult::failed(format!("Failed to open folder: {error}")),
        }
    }
}

/// Expand `$VAR`, `${VAR}` and `%VAR%` references, then a leading `~`.
///
/// Unset variables are left as written. Names are tried as given and then
/// uppercased, since parsed text arrives lowercased.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = ENV_VAR.replace_all(raw, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        std::env::var(name)
            .or_else(|_| std::env::var(name.to_uppercase()))
            .unwrap_or_else(|_| caps[0].to_string())
    });
    expand_home(&expanded)
}

fn expand_home(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home;
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

fn existing_folder(raw: &str) -> CoreResult<PathBuf> {
    let path = expand_path(raw);
    if path.exists() {
        Ok(path)
    } else {
        Err(CoreError::PathNotFound(path))
    }
}

fn validate_folder_name(name: &str) -> CoreResult<()> {
    let path = Path::new(name);
    if name.trim().is_empty() {
        return Err(CoreError::InvalidInput("folder name is empty".to_string()));
    }
    if path
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return Err(CoreError::InvalidInput(format!(
            "folder name must be relative: {name}"
        )));
    }
    Ok(())
}
