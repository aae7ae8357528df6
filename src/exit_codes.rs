//! Exit code constants for the cluster-env CLI.
//!
//! - 0: Success, assignments written to stdout
//! - 1: Failure (bad arguments, missing file, unreadable or malformed config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure. Nothing is written to stdout when this is returned.
pub const FAILURE: i32 = 1;
