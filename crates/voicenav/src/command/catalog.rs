//! Compiled category catalog.
//!
//! Built once from [`CommandPatterns`]; templates are compiled up front and
//! trigger phrases are normalized, so parsing never recompiles anything.

use crate::config::CommandPatterns;
use crate::error::{CoreError, CoreResult};

use super::template::Template;
use super::types::Action;

/// Command categories in precedence order. Earlier categories win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    OpenApp,
    CloseApp,
    FileOperations,
    SystemControls,
    Web,
    Shortcuts,
}

impl Category {
    pub const PRECEDENCE: [Category; 6] = [
        Category::OpenApp,
        Category::CloseApp,
        Category::FileOperations,
        Category::SystemControls,
        Category::Web,
        Category::Shortcuts,
    ];
}

/// Literal phrases bound to a parameterless action.
#[derive(Debug, Clone)]
pub struct TriggerSet {
    action: Action,
    phrases: Vec<String>,
}

impl TriggerSet {
    fn new(action: Action, phrases: &[String]) -> Self {
        let phrases = phrases
            .iter()
            .map(|phrase| phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self { action, phrases }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// True if any phrase occurs anywhere in `text`.
    pub fn fires(&self, text: &str) -> bool {
        self.phrases.iter().any(|phrase| text.contains(phrase.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) open_app: Vec<Template>,
    pub(crate) close_app: Vec<Template>,
    pub(crate) create_folder: Vec<Template>,
    pub(crate) open_folder: Vec<Template>,
    pub(crate) delete: Vec<Template>,
    pub(crate) system_controls: Vec<TriggerSet>,
    pub(crate) search: Vec<Template>,
    pub(crate) open_url: Vec<Template>,
    pub(crate) shortcuts: Vec<TriggerSet>,
}

impl Catalog {
    /// Compile every template and trigger list.
    ///
    /// Templates must carry the placeholder their category extracts
    /// (`app`, `folder`, `target`, `query`, `url`); `create_folder`
    /// templates may omit `{name}`.
    pub fn compile(patterns: &CommandPatterns) -> CoreResult<Self> {
        let files = &patterns.file_operations;
        let controls = &patterns.system_controls;
        let shortcuts = &patterns.shortcuts;

        Ok(Self {
            open_app: compile_all("open_app", &patterns.open_app, Some("app"))?,
            close_app: compile_all("close_app", &patterns.close_app, Some("app"))?,
            create_folder: compile_all("create_folder", &files.create_folder, None)?,
            open_folder: compile_all("open_folder", &files.open_folder, Some("folder"))?,
            delete: compile_all("delete", &files.delete, Some("target"))?,
            system_controls: vec![
                TriggerSet::new(Action::VolumeUp, &controls.volume_up),
                TriggerSet::new(Action::VolumeDown, &controls.volume_down),
                TriggerSet::new(Action::Mute, &controls.mute),
                TriggerSet::new(Action::Screenshot, &controls.screenshot),
                TriggerSet::new(Action::Lock, &controls.lock),
                TriggerSet::new(Action::Shutdown, &controls.shutdown),
                TriggerSet::new(Action::Restart, &controls.restart),
            ],
            search: compile_all("search", &patterns.web.search, Some("query"))?,
            open_url: compile_all("open_url", &patterns.web.open_url, Some("url"))?,
            shortcuts: vec![
                TriggerSet::new(Action::MinimizeAll, &shortcuts.minimize_all),
                TriggerSet::new(Action::TaskView, &shortcuts.task_view),
                TriggerSet::new(Action::SwitchWindow, &shortcuts.switch_window),
            ],
        })
    }

    /// Total number of templates and trigger phrases.
    pub fn len(&self) -> usize {
        let templates = [
            &self.open_app,
            &self.close_app,
            &self.create_folder,
            &self.open_folder,
            &self.delete,
            &self.search,
            &self.open_url,
        ]
        .iter()
        .map(|list| list.len())
        .sum::<usize>();
        let phrases = self
            .system_controls
            .iter()
            .chain(&self.shortcuts)
            .map(|set| set.phrases.len())
            .sum::<usize>();
        templates + phrases
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_all(
    category: &str,
    sources: &[String],
    required: Option<&str>,
) -> CoreResult<Vec<Template>> {
    sources
        .iter()
        .map(|source| {
            let template = Template::compile(&source.trim().to_lowercase())?;
            if let Some(name) = required {
                if !template.placeholders().any(|placeholder| placeholder == name) {
                    return Err(CoreError::Config(format!(
                        "{category} template '{source}' must contain {{{name}}}"
                    )));
                }
            }
            Ok(template)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandConfig;

    #[test]
    fn builtin_patterns_compile() {
        let catalog = Catalog::compile(&CommandConfig::default().command_patterns).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.system_controls.len(), 7);
        assert_eq!(catalog.shortcuts.len(), 3);
    }

    #[test]
    fn template_missing_required_placeholder_is_rejected() {
        let patterns = CommandPatterns {
            open_app: vec!["open the browser".to_string()],
            ..CommandPatterns::default()
        };
        let error = Catalog::compile(&patterns).expect_err("missing {app}");
        match error {
            CoreError::Config(message) => assert!(message.contains("{app}"), "{message}"),
            other => panic!("expected config error, got: {other:?}"),
        }
    }

    #[test]
    fn create_folder_may_omit_name() {
        let mut patterns = CommandPatterns::default();
        patterns.file_operations.create_folder = vec!["create a new folder".to_string()];
        assert!(Catalog::compile(&patterns).is_ok());
    }

    #[test]
    fn templates_are_lowercased() {
        let patterns = CommandPatterns {
            open_app: vec!["  Open {app} ".to_string()],
            ..CommandPatterns::default()
        };
        let catalog = Catalog::compile(&patterns).unwrap();
        assert_eq!(catalog.open_app[0].source(), "open {app}");
    }

    #[test]
    fn trigger_sets_ignore_blank_phrases() {
        let set = TriggerSet::new(Action::Mute, &["".to_string(), "  ".to_string()]);
        assert!(!set.fires("anything at all"));
    }

    #[test]
    fn trigger_phrases_match_as_substrings() {
        let set = TriggerSet::new(Action::VolumeUp, &["Volume Up".to_string()]);
        assert!(set.fires("please turn the volume up a bit"));
        assert!(!set.fires("volume down"));
    }

    #[test]
    fn precedence_order_is_fixed() {
        assert_eq!(Category::PRECEDENCE[0], Category::OpenApp);
        assert_eq!(Category::PRECEDENCE[5], Category::Shortcuts);
    }
}
