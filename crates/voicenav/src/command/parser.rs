use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::config::{CommandConfig, LookupTables};
use crate::error::CoreResult;

use super::catalog::{Catalog, Category, TriggerSet};
use super::template::{Params, Template};
use super::types::{Action, Command};

const DEFAULT_FOLDER_NAME: &str = "New Folder";

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9+.-]*://").expect("scheme pattern must be valid")
});

/// Turns normalized text into a [`Command`].
///
/// Categories are tried in [`Category::PRECEDENCE`] order and the first
/// match wins. Within a category, templates are tried in configured order.
#[derive(Debug, Clone)]
pub struct IntentParser {
    catalog: Catalog,
    tables: Arc<LookupTables>,
}

impl IntentParser {
    pub fn new(catalog: Catalog, tables: Arc<LookupTables>) -> Self {
        Self { catalog, tables }
    }

    /// Compile the catalog from `config` and take shared ownership of `tables`.
    pub fn from_config(config: &CommandConfig, tables: Arc<LookupTables>) -> CoreResult<Self> {
        Ok(Self::new(Catalog::compile(&config.command_patterns)?, tables))
    }

    pub fn tables(&self) -> &Arc<LookupTables> {
        &self.tables
    }

    /// Parse `text`. Returns `None` for empty input or when nothing matches.
    pub fn parse(&self, text: &str) -> Option<Command> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }

        for category in Category::PRECEDENCE {
            if let Some(action) = self.parse_category(category, &text) {
                let command = Command::new(action);
                tracing::info!(
                    action = command.tag(),
                    requires_confirmation = command.requires_confirmation(),
                    "parsed command"
                );
                return Some(command);
            }
        }

        tracing::warn!("could not parse command: {text}");
        None
    }

    fn parse_category(&self, category: Category, text: &str) -> Option<Action> {
        tracing::debug!(?category, "trying category");
        match category {
            Category::OpenApp => self.parse_open_app(text),
            Category::CloseApp => first_param(&self.catalog.close_app, text, "app")
                .map(|app| Action::CloseApp { app }),
            Category::FileOperations => self.parse_file_operation(text),
            Category::SystemControls => first_trigger(&self.catalog.system_controls, text),
            Category::Web => self.parse_web(text),
            Category::Shortcuts => first_trigger(&self.catalog.shortcuts, text),
        }
    }

    /// An `app` that is not registered does not count as a match; later
    /// templates and categories still get a chance.
    fn parse_open_app(&self, text: &str) -> Option<Action> {
        self.catalog.open_app.iter().find_map(|template| {
            let app = template.matches(text)?.remove("app")?.to_lowercase();
            if self.tables.application(&app).is_some() {
                Some(Action::OpenApp { app })
            } else {
                tracing::debug!(app = %app, template = template.source(), "unregistered application");
                None
            }
        })
    }

    fn parse_file_operation(&self, text: &str) -> Option<Action> {
        if let Some(mut params) = first_match(&self.catalog.create_folder, text) {
            let name = params
                .remove("name")
                .unwrap_or_else(|| DEFAULT_FOLDER_NAME.to_string());
            return Some(Action::CreateFolder { name });
        }

        if let Some(folder) = first_param(&self.catalog.open_folder, text, "folder") {
            let path = self
                .tables
                .folder(&folder)
                .map(str::to_string)
                .unwrap_or(folder);
            return Some(Action::OpenFolder { path });
        }

        first_param(&self.catalog.delete, text, "target").map(|target| Action::Delete { target })
    }

    fn parse_web(&self, text: &str) -> Option<Action> {
        if let Some(query) = first_param(&self.catalog.search, text, "query") {
            return Some(Action::WebSearch { query });
        }

        first_param(&self.catalog.open_url, text, "url").map(|url| Action::OpenUrl {
            url: with_default_scheme(url),
        })
    }
}

/// Trim and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Prepend `https://` unless the value already starts with a scheme.
pub fn with_default_scheme(url: String) -> String {
    if SCHEME_PREFIX.is_match(&url) {
        url
    } else {
        format!("https://{url}")
    }
}

fn first_match(templates: &[Template], text: &str) -> Option<Params> {
    templates.iter().find_map(|template| template.matches(text))
}

fn first_param(templates: &[Template], text: &str, name: &str) -> Option<String> {
    first_match(templates, text).and_then(|mut params| params.remove(name))
}

fn first_trigger(sets: &[TriggerSet], text: &str) -> Option<Action> {
    sets.iter()
        .find(|set| set.fires(text))
        .map(|set| set.action().clone())
}

#[cfg(test)]
mod tests;
