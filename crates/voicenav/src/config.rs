//! Configuration data: command vocabulary, lookup tables and runtime settings.

pub mod commands;
pub mod lookup;
pub mod settings;

pub use commands::{
    load_command_config, CommandConfig, CommandPatterns, FileOperationPatterns,
    ShortcutTriggers, SystemControlTriggers, WebPatterns,
};
pub use lookup::{current_username, LookupTables};
pub use settings::{load_settings, Settings, DEFAULT_SEARCH_URL, DEFAULT_WAKE_WORD};
