//! Loading and decoding of cluster config documents.

use super::model::ConfigDocument;
use crate::error::{ClusterEnvError, Result};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

impl ConfigDocument {
    /// Load a config document from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - Successfully decoded document
    /// * `Err(ClusterEnvError::NotFound)` - The path does not exist
    /// * `Err(ClusterEnvError::Read)` - The path exists but cannot be read
    /// * `Err(ClusterEnvError::Parse)` / `InvalidDocument` - See [`ConfigDocument::from_yaml`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading cluster config");

        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ClusterEnvError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ClusterEnvError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::from_yaml(&content)
    }

    /// Decode a config document from a YAML string.
    ///
    /// The top level must be a mapping. Unknown keys are ignored; known
    /// sections with the wrong shape are reported as parse errors.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)?;

        if !value.is_mapping() {
            return Err(ClusterEnvError::InvalidDocument(format!(
                "expected a mapping at the top level, found {}",
                describe(&value)
            )));
        }

        let document: ConfigDocument = serde_yaml::from_value(value)?;
        debug!(
            has_project = document.project.is_some(),
            jobs = document.jobs.len(),
            has_claude = document.claude.is_some(),
            "decoded cluster config"
        );
        Ok(document)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
