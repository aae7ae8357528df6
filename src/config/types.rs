//! Value types and serde helpers shared by the config model.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// A scalar document value, kept as written so it can be rendered verbatim.
///
/// Fields like `review_budget` accept either `0.50` or `"0.50"`, and `array`
/// may be written as a bare number. Rendering follows the YAML text form
/// (`1.0` stays `1.0`), booleans render as `true`/`false`, and an explicit
/// `null` renders as nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    Text(String),
}

impl Scalar {
    /// Render the value as the text that ends up in the assignment.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Number(value) => write!(f, "{}", value),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

/// `depends_on` as written: one job name or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DependsOn {
    One(String),
    Many(Vec<String>),
}

/// Normalize `depends_on` to an ordered list at decode time.
///
/// A bare string is a one-element list; `null` is an empty list.
pub(crate) fn deserialize_depends_on<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<DependsOn>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(DependsOn::One(name)) => vec![name],
        Some(DependsOn::Many(names)) => names,
    })
}

/// Deserialize an on/off setting, reading the YAML 1.1 boolean words
/// (`yes`/`no`/`on`/`off` in lower, title or upper case) as booleans.
/// Other strings are kept as written.
pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<Scalar, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => match text.as_str() {
            "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Scalar::Bool(true),
            "no" | "No" | "NO" | "off" | "Off" | "OFF" => Scalar::Bool(false),
            _ => Scalar::Text(text),
        },
        other => other,
    })
}

/// Deserialize a present key into `Some`, keeping an explicit `null` as
/// `Some(Scalar::Null)` so it stays distinguishable from an absent key.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Some)
}

/// Deserialize a list where `null` means empty.
pub(crate) fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Default value functions for serde
pub(crate) fn default_empty() -> Scalar {
    Scalar::from("")
}
pub(crate) fn default_job_type() -> Scalar {
    Scalar::from("sbatch")
}
pub(crate) fn default_false() -> Scalar {
    Scalar::from(false)
}
pub(crate) fn default_max_fix_cycles() -> Scalar {
    Scalar::from(3_i64)
}
pub(crate) fn default_review_model() -> Scalar {
    Scalar::from("sonnet")
}
pub(crate) fn default_fix_model() -> Scalar {
    Scalar::from("opus")
}
pub(crate) fn default_review_budget() -> Scalar {
    Scalar::from("0.50")
}
pub(crate) fn default_fix_budget() -> Scalar {
    Scalar::from("1.00")
}
