//! CLI argument parsing for cluster-env.
//!
//! Uses clap derive macros for declarative argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Flatten a cluster job configuration into shell variable assignments.
///
/// Reads the YAML config at CONFIG and prints `NAME=value` lines suitable
/// for `eval "$(cluster-env cluster.yaml)"`:
/// - PROJECT_NAME and NUM_JOBS
/// - JOB_<i>_{NAME,SCRIPT,TYPE,ARRAY,DEPENDS_ON,SBATCH_FLAGS} per job
/// - CLAUDE_* automation settings
#[derive(Parser, Debug)]
#[command(name = "cluster-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the cluster config (e.g., cluster.yaml).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Increase diagnostic output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments, returning clap's error for the caller
    /// to report (help and version requests included).
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
