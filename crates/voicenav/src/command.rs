//! Command interpretation: templates, the category catalog and the intent parser.

pub mod catalog;
pub mod parser;
pub mod template;
pub mod types;

pub use catalog::{Catalog, Category};
pub use parser::{normalize, IntentParser};
pub use template::{match_template, Params, Segment, Template};
pub use types::{Action, Command, CommandRecord};
