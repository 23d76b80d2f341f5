//! The interactive loop: one input line in, one assistant reply out.

use std::io::{BufRead, Write};

use voicenav::command::normalize;
use voicenav::executor::confirmation_notice;
use voicenav::{Dispatcher, IntentParser, Settings};

const NOT_UNDERSTOOD: &str = "Sorry, I didn't understand that command";
const HINT: &str = "Try saying 'open chrome' or 'search for weather'";

/// What the loop should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Ignored,
    Reply(String),
    Exit,
}

pub struct Shell {
    parser: IntentParser,
    dispatcher: Dispatcher,
    wake_word: Option<String>,
    exit_phrases: Vec<String>,
}

impl Shell {
    pub fn new(parser: IntentParser, dispatcher: Dispatcher, settings: &Settings) -> Self {
        let wake_word = settings
            .wake_word_enabled
            .then(|| normalize(&settings.wake_word))
            .filter(|word| !word.is_empty());
        let exit_phrases = settings
            .exit_phrases
            .iter()
            .map(|phrase| normalize(phrase))
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self {
            parser,
            dispatcher,
            wake_word,
            exit_phrases,
        }
    }

    pub fn parser(&self) -> &IntentParser {
        &self.parser
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn respond(&self, line: &str) -> Turn {
        let text = normalize(line);
        if text.is_empty() {
            return Turn::Ignored;
        }

        let text = match &self.wake_word {
            Some(wake_word) => match strip_wake_word(&text, wake_word) {
                Some(rest) => rest.to_string(),
                None => {
                    tracing::debug!("no wake word, ignoring: {text}");
                    return Turn::Ignored;
                }
            },
            None => text,
        };
        if text.is_empty() {
            return Turn::Ignored;
        }

        if self
            .exit_phrases
            .iter()
            .any(|phrase| text.contains(phrase.as_str()))
        {
            return Turn::Exit;
        }

        let Some(command) = self.parser.parse(&text) else {
            return Turn::Reply(format!("{NOT_UNDERSTOOD}. {HINT}"));
        };

        if command.requires_confirmation() {
            return Turn::Reply(format!(
                "{}. Please do this manually.",
                confirmation_notice(command.tag())
            ));
        }

        Turn::Reply(self.dispatcher.execute(Some(&command)).message)
    }

    pub fn banner(&self) -> String {
        let mut lines = vec![
            "Voice navigation assistant ready.".to_string(),
            "Commands:".to_string(),
            "  open <app> / close <app>".to_string(),
            "  create folder <name> / open <folder> folder".to_string(),
            "  volume up / volume down / mute / take screenshot / lock computer".to_string(),
            "  search for <query> / go to <site>".to_string(),
            "  show desktop / task view / switch window".to_string(),
        ];
        if let Some(wake_word) = &self.wake_word {
            lines.push(format!("Start each command with '{wake_word}'."));
        }
        if let Some(phrase) = self.exit_phrases.first() {
            lines.push(format!("Say '{phrase}' to quit."));
        }
        lines.join("\n")
    }

    /// Read lines from `input` until it ends or an exit phrase is heard.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", self.banner())?;
        for line in input.lines() {
            let line = line?;
            match self.respond(&line) {
                Turn::Ignored => continue,
                Turn::Reply(message) => writeln!(output, "[ASSISTANT] {message}")?,
                Turn::Exit => {
                    writeln!(output, "[ASSISTANT] Goodbye!")?;
                    break;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// The text after `wake_word`, if `text` starts with it as a whole word.
fn strip_wake_word<'a>(text: &'a str, wake_word: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(wake_word)?;
    let separated = rest
        .chars()
        .next()
        .map_or(true, |c| c == ',' || c.is_whitespace());
    separated.then(|| rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace()))
}
