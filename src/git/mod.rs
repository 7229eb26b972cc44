pub mod cli;
pub mod repo;

pub use repo::{count_in_range, load_commit_times, GitRepo};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whether two paths name the same directory once symlinks are resolved.
pub fn same_dir(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// How commit counts are read from a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GitBackend {
    /// Walk history in-process with gix.
    #[default]
    Gix,
    /// Run `git log` once per day.
    Cli,
}
