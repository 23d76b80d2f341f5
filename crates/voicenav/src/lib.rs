//! Text command interpretation and dispatch.
//!
//! [`IntentParser`] turns a spoken or typed phrase into a [`Command`];
//! [`Dispatcher`] runs it against a [`Platform`], refusing anything that
//! needs a human to confirm it first.

pub mod error;

pub mod command;
pub mod config;
pub mod executor;
pub mod permissions;
pub mod platform;

pub use crate::command::{Action, Command, CommandRecord, IntentParser};
pub use crate::config::{CommandConfig, LookupTables, Settings};
pub use crate::error::{CoreError, CoreResult};
pub use crate::executor::{Dispatcher, ExecutionResult};
pub use crate::platform::{default_platform, Platform, SharedPlatform};
