//! A single `NAME=value` output line.

use super::shell::quote_value;
use std::fmt;

/// One shell variable assignment.
///
/// `value` holds the raw text; quoting happens when the line is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, quote_value(&self.value))
    }
}

/// Join assignments into the script text, one per line, without a trailing newline.
pub fn render(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(Assignment::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
