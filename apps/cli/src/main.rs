//! `voicenav` -- text-driven desktop command assistant.
//!
//! - `voicenav run` -- interactive loop over stdin (the default).
//! - `voicenav parse <text>` -- print the recognized command as JSON.
//! - `voicenav exec <text>` -- parse and execute once, print the result.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use voicenav::config::{current_username, load_command_config, load_settings};
use voicenav::platform::{default_platform, RecordingPlatform, SharedPlatform};
use voicenav::{CommandConfig, Dispatcher, IntentParser, LookupTables, Settings};

mod shell;

use shell::Shell;

#[derive(Parser)]
#[command(name = "voicenav", about = "Text-driven desktop command assistant", version)]
struct Cli {
    /// Command vocabulary file (commands.json). Defaults to the built-in catalog.
    #[arg(long, global = true)]
    commands: Option<PathBuf>,

    /// Runtime settings file (settings.json).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Also append logs to this file; stderr keeps logging.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Record platform calls instead of performing them.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin until an exit phrase.
    Run,

    /// Parse text and print the command record.
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Parse and execute text once.
    Exec {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = match &cli.commands {
        Some(path) => load_command_config(path)?,
        None => CommandConfig::default(),
    };
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    let username = current_username();
    let tables = Arc::new(LookupTables::resolve(&config, &username));
    let parser = IntentParser::from_config(&config, Arc::clone(&tables))
        .context("command patterns are invalid")?;
    let platform: SharedPlatform = if cli.dry_run {
        Arc::new(RecordingPlatform::new())
    } else {
        default_platform()
    };
    tracing::info!(platform = platform.id(), user = %username, "voicenav starting");

    let dispatcher = Dispatcher::new(platform, tables, &settings);
    let shell = Shell::new(parser, dispatcher, &settings);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => shell.run(std::io::stdin().lock(), std::io::stdout().lock())?,
        Commands::Parse { text } => {
            let record = shell.parser().parse(&text.join(" ")).map(|command| command.to_record());
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Exec { text } => {
            let command = shell.parser().parse(&text.join(" "));
            let result = shell.dispatcher().execute(command.as_ref());
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let file = log_file.map(open_log_file).transpose()?;
    log_subscriber(filter, file).init();
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<Mutex<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(Mutex::new(file))
}

/// Stderr always gets the log; a log file, when given, gets a plain-text copy.
fn log_subscriber(
    filter: EnvFilter,
    file: Option<Mutex<File>>,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file.map(|file| fmt::layer().with_ansi(false).with_writer(file)))
}
