//! Placeholder templates such as `open {app}`.
//!
//! A template is compiled once into literal and placeholder segments plus an
//! anchored regex. Each placeholder captures one or more characters, greedily,
//! and a match must consume the entire input.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;

use crate::error::{CoreError, CoreResult};

/// Values captured by a successful template match, keyed by placeholder name.
pub type Params = BTreeMap<String, String>;

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must appear verbatim.
    Literal(String),
    /// A named capture, written `{name}` in the template source.
    Placeholder(String),
}

/// A compiled template. Cheap to match repeatedly; compile once and keep it.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    matcher: Regex,
}

impl Template {
    /// Compile a template string.
    ///
    /// Fails if a placeholder name is used twice. A brace that does not form
    /// a valid `{name}` placeholder is kept as literal text.
    pub fn compile(source: &str) -> CoreResult<Self> {
        let segments = split_segments(source);

        let mut seen = HashSet::new();
        let mut pattern = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
                Segment::Placeholder(name) => {
                    if !seen.insert(name.as_str()) {
                        return Err(CoreError::InvalidInput(format!(
                            "duplicate placeholder '{name}' in template '{source}'"
                        )));
                    }
                    pattern.push_str("(.+)");
                }
            }
        }
        pattern.push('$');

        let matcher = Regex::new(&pattern).map_err(|error| {
            CoreError::Internal(format!("failed to compile template '{source}': {error}"))
        })?;

        Ok(Self {
            source: source.to_string(),
            segments,
            matcher,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match `text` against the whole template.
    ///
    /// `text` is expected to be normalized already; no trimming or case
    /// folding happens here. Returns `None` when the text does not match.
    pub fn matches(&self, text: &str) -> Option<Params> {
        let captures = self.matcher.captures(text)?;
        let params = self
            .placeholders()
            .enumerate()
            .filter_map(|(index, name)| {
                captures
                    .get(index + 1)
                    .map(|value| (name.to_string(), value.as_str().to_string()))
            })
            .collect();
        Some(params)
    }
}

/// One-shot helper: compile `template` and match it against `text`.
pub fn match_template(template: &str, text: &str) -> CoreResult<Option<Params>> {
    Ok(Template::compile(template)?.matches(text))
}

fn split_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(open) = rest.find('{') {
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_name(after) {
            Some(name) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name.to_string()));
                rest = &after[name.len() + 1..];
            }
            None => {
                literal.push('{');
                rest = after;
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Returns the name if `text` starts with `name}` where name is one or more
/// word characters.
fn placeholder_name(text: &str) -> Option<&str> {
    let close = text.find('}')?;
    let name = &text[..close];
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(name)
}
