//! Document struct definitions and default implementations.

use super::types::*;
use serde::Deserialize;

/// Root of `cluster.yaml`.
///
/// Only the three known sections are modeled; anything else in the file is
/// ignored. A section written as `null` is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Project metadata. `None` when the section is absent, which suppresses
    /// `PROJECT_NAME` entirely (an empty section still emits it).
    pub project: Option<ProjectInfo>,

    /// Job definitions in document order.
    #[serde(deserialize_with = "deserialize_null_as_empty")]
    pub jobs: Vec<JobSpec>,

    /// Automation-assistant settings.
    pub claude: Option<AutomationConfig>,
}

/// The `project` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    #[serde(default = "default_empty")]
    pub name: Scalar,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: default_empty(),
        }
    }
}

/// One entry of `jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSpec {
    /// Job name. `None` only when the key is absent; see [`JobSpec::name_at`].
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Scalar>,

    /// Batch script submitted for this job.
    #[serde(default = "default_empty")]
    pub script: Scalar,

    /// Submission type (default: "sbatch").
    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: Scalar,

    /// Job-array range specifier, passed through untouched (e.g. "1-10").
    #[serde(default = "default_empty")]
    pub array: Scalar,

    /// Names of jobs this one depends on, in the order written.
    #[serde(default, deserialize_with = "deserialize_depends_on")]
    pub depends_on: Vec<String>,

    /// Extra flags handed to sbatch verbatim.
    #[serde(default = "default_empty")]
    pub sbatch_flags: Scalar,
}

impl Default for JobSpec {
    fn default() -> Self {
        Self {
            name: None,
            script: default_empty(),
            job_type: default_job_type(),
            array: default_empty(),
            depends_on: Vec::new(),
            sbatch_flags: default_empty(),
        }
    }
}

impl JobSpec {
    /// Name of the job at position `index`, falling back to `job_<index>`
    /// when the document does not name it.
    pub fn name_at(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.render(),
            None => format!("job_{}", index),
        }
    }

    /// Dependencies joined with commas (empty when there are none).
    pub fn depends_on_joined(&self) -> String {
        self.depends_on.join(",")
    }
}

/// The `claude` section: review/auto-fix integration settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Accepts YAML 1.1 words (`yes`, `off`, ...) as booleans.
    #[serde(default = "default_false", deserialize_with = "deserialize_flag")]
    pub enabled: Scalar,

    #[serde(default = "default_false", deserialize_with = "deserialize_flag")]
    pub auto_fix: Scalar,

    #[serde(default = "default_max_fix_cycles")]
    pub max_fix_cycles: Scalar,

    #[serde(default = "default_review_model")]
    pub review_model: Scalar,

    #[serde(default = "default_fix_model")]
    pub fix_model: Scalar,

    /// Spend cap per review run; number or string.
    #[serde(default = "default_review_budget")]
    pub review_budget: Scalar,

    /// Spend cap per fix run; number or string.
    #[serde(default = "default_fix_budget")]
    pub fix_budget: Scalar,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            enabled: default_false(),
            auto_fix: default_false(),
            max_fix_cycles: default_max_fix_cycles(),
            review_model: default_review_model(),
            fix_model: default_fix_model(),
            review_budget: default_review_budget(),
            fix_budget: default_fix_budget(),
        }
    }
}
