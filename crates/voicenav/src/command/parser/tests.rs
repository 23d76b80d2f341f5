use std::sync::Arc;

use crate::command::{Action, Command, IntentParser};
use crate::config::{CommandConfig, LookupTables};

fn test_config() -> CommandConfig {
    CommandConfig::from_json(
        r#"{
            "applications": {
                "chrome": "chrome.exe",
                "Spotify": "C:\\Users\\{username}\\AppData\\Roaming\\Spotify\\Spotify.exe"
            },
            "folder_shortcuts": {
                "downloads": "C:\\Users\\{username}\\Downloads"
            },
            "command_patterns": {
                "open_app": ["open {app}", "launch {app}"],
                "close_app": ["close {app}"],
                "file_operations": {
                    "create_folder": ["create folder {name}", "create a new folder"],
                    "open_folder": ["open {folder} folder", "open {folder}"],
                    "delete": ["delete {target}"]
                },
                "system_controls": {
                    "volume_up": ["volume up"],
                    "volume_down": ["volume down"],
                    "mute": ["mute"],
                    "screenshot": ["screenshot"],
                    "lock": ["lock computer"],
                    "shutdown": ["shutdown", "shut down"],
                    "restart": ["restart"]
                },
                "web": {
                    "search": ["search for {query}"],
                    "open_url": ["go to {url}"]
                },
                "shortcuts": {
                    "minimize_all": ["show desktop"],
                    "task_view": ["task view"],
                    "switch_window": ["switch window"]
                }
            }
        }"#,
    )
    .expect("test config parses")
}

fn parser_for(config: &CommandConfig) -> IntentParser {
    let tables = Arc::new(LookupTables::resolve(config, "ada"));
    IntentParser::from_config(config, tables).expect("catalog compiles")
}

fn parser() -> IntentParser {
    parser_for(&test_config())
}

fn parsed_action(text: &str) -> Option<Action> {
    parser().parse(text).map(|command| command.action().clone())
}

#[test]
fn open_registered_app() {
    let command = parser().parse("open chrome").expect("should parse");
    assert_eq!(command.tag(), "open_app");
    assert_eq!(
        command.parameters().get("app").map(String::as_str),
        Some("chrome")
    );
    assert!(!command.requires_confirmation());
}

#[test]
fn app_lookup_ignores_case() {
    assert_eq!(
        parsed_action("  Launch SPOTIFY "),
        Some(Action::OpenApp {
            app: "spotify".to_string()
        })
    );
}

#[test]
fn unregistered_app_falls_through_to_folder() {
    // "open {app}" matches textually but notepad99 is unknown, so the
    // open-folder category gets the input.
    assert_eq!(
        parsed_action("open notepad99"),
        Some(Action::OpenFolder {
            path: "notepad99".to_string()
        })
    );
}

#[test]
fn unregistered_app_with_no_other_match_is_none() {
    let mut config = test_config();
    config.command_patterns.file_operations.open_folder.clear();
    assert_eq!(parser_for(&config).parse("open notepad99"), None);
}

#[test]
fn close_app_does_not_consult_registry() {
    assert_eq!(
        parsed_action("close notepad99"),
        Some(Action::CloseApp {
            app: "notepad99".to_string()
        })
    );
}

#[test]
fn open_folder_resolves_shortcut() {
    assert_eq!(
        parsed_action("open downloads folder"),
        Some(Action::OpenFolder {
            path: "C:\\Users\\ada\\Downloads".to_string()
        })
    );
}

#[test]
fn open_folder_keeps_raw_path_when_not_a_shortcut() {
    assert_eq!(
        parsed_action("open /tmp/reports folder"),
        Some(Action::OpenFolder {
            path: "/tmp/reports".to_string()
        })
    );
}

#[test]
fn create_folder_extracts_name() {
    assert_eq!(
        parsed_action("create folder invoices"),
        Some(Action::CreateFolder {
            name: "invoices".to_string()
        })
    );
}

#[test]
fn create_folder_without_name_uses_default() {
    assert_eq!(
        parsed_action("create a new folder"),
        Some(Action::CreateFolder {
            name: "New Folder".to_string()
        })
    );
}

#[test]
fn delete_requires_confirmation() {
    let command = parser().parse("delete old_report").expect("should parse");
    assert_eq!(command.tag(), "delete");
    assert_eq!(
        command.parameters().get("target").map(String::as_str),
        Some("old_report")
    );
    assert!(command.requires_confirmation());
}

#[test]
fn system_controls_use_substring_triggers() {
    assert_eq!(parsed_action("please turn the volume up"), Some(Action::VolumeUp));
    assert_eq!(parsed_action("volume down"), Some(Action::VolumeDown));
    assert_eq!(parsed_action("take a screenshot now"), Some(Action::Screenshot));
    assert_eq!(parsed_action("lock computer"), Some(Action::Lock));
}

#[test]
fn power_actions_are_gated() {
    for text in ["shut down the pc", "restart"] {
        let command = parser().parse(text).expect("should parse");
        assert!(command.requires_confirmation(), "{text} should be gated");
    }
    assert_eq!(parsed_action("shutdown"), Some(Action::Shutdown));
    assert_eq!(parsed_action("restart"), Some(Action::Restart));
}

#[test]
fn system_controls_follow_declared_order() {
    // Both "volume up" and "mute" occur; volume_up comes first.
    assert_eq!(parsed_action("volume up then mute"), Some(Action::VolumeUp));
}

#[test]
fn web_search_extracts_query() {
    assert_eq!(
        parsed_action("search for weather in lisbon"),
        Some(Action::WebSearch {
            query: "weather in lisbon".to_string()
        })
    );
}

#[test]
fn open_url_gets_default_scheme() {
    let command = parser().parse("go to example.com").expect("should parse");
    assert_eq!(command.tag(), "open_url");
    assert_eq!(
        command.parameters().get("url").map(String::as_str),
        Some("https://example.com")
    );
}

#[test]
fn open_url_keeps_existing_scheme() {
    assert_eq!(
        parsed_action("go to http://intranet.local"),
        Some(Action::OpenUrl {
            url: "http://intranet.local".to_string()
        })
    );
}

#[test]
fn open_url_scheme_must_be_a_prefix() {
    assert_eq!(
        parsed_action("go to example.com/login?next=https://example.com/home"),
        Some(Action::OpenUrl {
            url: "https://example.com/login?next=https://example.com/home".to_string()
        })
    );
    assert_eq!(
        parsed_action("go to ftp://files.local"),
        Some(Action::OpenUrl {
            url: "ftp://files.local".to_string()
        })
    );
}

#[test]
fn trailing_words_after_app_name_do_not_open_an_app() {
    // "open {app}" captures "chrome now", which is not registered.
    assert_eq!(
        parsed_action("open chrome now"),
        Some(Action::OpenFolder {
            path: "chrome now".to_string()
        })
    );

    let mut config = test_config();
    config.command_patterns.file_operations.open_folder.clear();
    assert_eq!(parser_for(&config).parse("open chrome now"), None);
}

#[test]
fn shortcuts_are_recognized() {
    assert_eq!(parsed_action("show desktop"), Some(Action::MinimizeAll));
    assert_eq!(parsed_action("task view"), Some(Action::TaskView));
    assert_eq!(parsed_action("switch window"), Some(Action::SwitchWindow));
}

#[test]
fn earlier_category_wins_on_collision() {
    let mut config = test_config();
    config.command_patterns.web.open_url = vec!["open {url}".to_string()];
    let parser = parser_for(&config);
    assert_eq!(
        parser.parse("open chrome").map(|command| command.tag()),
        Some("open_app")
    );
}

#[test]
fn system_controls_beat_web_search() {
    assert_eq!(
        parsed_action("search for screenshot tools"),
        Some(Action::Screenshot)
    );
}

#[test]
fn empty_and_blank_input_is_none() {
    let parser = parser();
    assert_eq!(parser.parse(""), None);
    assert_eq!(parser.parse("   \t "), None);
}

#[test]
fn unrecognized_input_is_none() {
    assert_eq!(parser().parse("make me a sandwich"), None);
}

#[test]
fn parsing_is_deterministic() {
    let parser = parser();
    for text in ["open chrome", "open notepad99", "delete x", "nonsense"] {
        let first: Option<Command> = parser.parse(text);
        let second = parser.parse(text);
        assert_eq!(first, second, "{text}");
    }
}
