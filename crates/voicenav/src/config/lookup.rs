use std::collections::HashMap;

use super::commands::CommandConfig;

pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Read-only registries resolved from a [`CommandConfig`].
///
/// Keys are lowercased and `{username}` is substituted exactly once, at
/// construction. Nothing mutates the tables afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTables {
    applications: HashMap<String, String>,
    folder_shortcuts: HashMap<String, String>,
}

impl LookupTables {
    pub fn resolve(config: &CommandConfig, username: &str) -> Self {
        Self {
            applications: substitute(&config.applications, username),
            folder_shortcuts: substitute(&config.folder_shortcuts, username),
        }
    }

    /// Launch command for an application, matched case-insensitively.
    pub fn application(&self, name: &str) -> Option<&str> {
        self.applications
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Path for a folder shortcut, matched case-insensitively.
    pub fn folder(&self, name: &str) -> Option<&str> {
        self.folder_shortcuts
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Registered application names, sorted.
    pub fn application_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.applications.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Registered folder shortcut names, sorted.
    pub fn folder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.folder_shortcuts.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

/// The login name used for `{username}`: `USERNAME`, then `USER`, else `User`.
pub fn current_username() -> String {
    ["USERNAME", "USER"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "User".to_string())
}

fn substitute(entries: &HashMap<String, String>, username: &str) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| {
            (
                name.to_lowercase(),
                value.replace(USERNAME_PLACEHOLDER, username),
            )
        })
        .collect()
}
