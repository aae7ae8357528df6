//! Cluster job configuration model.
//!
//! This module defines the typed view of `cluster.yaml`: project metadata,
//! the ordered job list, and the `claude` automation block. Parsing is
//! forward-compatible (unknown fields are ignored) and every documented
//! default is filled in by serde.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{AutomationConfig, ConfigDocument, JobSpec, ProjectInfo};
