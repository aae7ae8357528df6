//! Flattening of a cluster config into shell variable assignments.
//!
//! Output order is fixed:
//!
//! 1. `PROJECT_NAME` (only when the `project` section exists)
//! 2. `NUM_JOBS`
//! 3. six `JOB_<i>_*` lines per job, in document order
//! 4. seven `CLAUDE_*` lines, always present
//!
//! The caller `eval`s the rendered text, so every value is shell-quoted.

mod assignment;
mod shell;


pub use assignment::{Assignment, render};

use crate::config::{AutomationConfig, ConfigDocument, JobSpec};
use tracing::{debug, trace};

/// Number of lines emitted for each job.
pub const JOB_FIELDS: usize = 6;

/// Number of `CLAUDE_*` lines emitted.
pub const AUTOMATION_FIELDS: usize = 7;

/// Flatten a decoded document into its ordered assignment lines.
pub fn flatten(document: &ConfigDocument) -> Vec<Assignment> {
    let mut lines =
        Vec::with_capacity(2 + document.jobs.len() * JOB_FIELDS + AUTOMATION_FIELDS);

    if let Some(project) = &document.project {
        lines.push(Assignment::new("PROJECT_NAME", project.name.render()));
    }

    lines.push(Assignment::new("NUM_JOBS", document.jobs.len().to_string()));

    for (index, job) in document.jobs.iter().enumerate() {
        push_job(&mut lines, index, job);
    }

    match &document.claude {
        Some(claude) => push_automation(&mut lines, claude),
        None => push_automation(&mut lines, &AutomationConfig::default()),
    }

    debug!(lines = lines.len(), jobs = document.jobs.len(), "flattened cluster config");
    lines
}

/// Flatten and render in one step.
pub fn flatten_to_script(document: &ConfigDocument) -> String {
    render(&flatten(document))
}

fn push_job(lines: &mut Vec<Assignment>, index: usize, job: &JobSpec) {
    let name = job.name_at(index);
    trace!(index, name = %name, "flattening job");

    let prefix = format!("JOB_{}", index);
    lines.push(Assignment::new(format!("{}_NAME", prefix), name));
    lines.push(Assignment::new(format!("{}_SCRIPT", prefix), job.script.render()));
    lines.push(Assignment::new(format!("{}_TYPE", prefix), job.job_type.render()));
    lines.push(Assignment::new(format!("{}_ARRAY", prefix), job.array.render()));
    lines.push(Assignment::new(
        format!("{}_DEPENDS_ON", prefix),
        job.depends_on_joined(),
    ));
    lines.push(Assignment::new(
        format!("{}_SBATCH_FLAGS", prefix),
        job.sbatch_flags.render(),
    ));
}

fn push_automation(lines: &mut Vec<Assignment>, claude: &AutomationConfig) {
    lines.push(Assignment::new(
        "CLAUDE_ENABLED",
        claude.enabled.render().to_lowercase(),
    ));
    lines.push(Assignment::new(
        "CLAUDE_AUTO_FIX",
        claude.auto_fix.render().to_lowercase(),
    ));
    lines.push(Assignment::new(
        "CLAUDE_MAX_FIX_CYCLES",
        claude.max_fix_cycles.render(),
    ));
    lines.push(Assignment::new("CLAUDE_REVIEW_MODEL", claude.review_model.render()));
    lines.push(Assignment::new("CLAUDE_FIX_MODEL", claude.fix_model.render()));
    lines.push(Assignment::new("CLAUDE_REVIEW_BUDGET", claude.review_budget.render()));
    lines.push(Assignment::new("CLAUDE_FIX_BUDGET", claude.fix_budget.render()));
}
