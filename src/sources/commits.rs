use super::ActivitySource;
use crate::git::{cli, count_in_range, load_commit_times, GitBackend};
use crate::model::Contribution;
use crate::util::local_day_bounds;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Commit counts for one repository. `lookup` reports raw commits in
/// `Contribution::commits` and leaves `count` at zero; the aggregator
/// decides how commits turn into activity.
#[derive(Debug, Clone)]
pub struct CommitSource {
    label: String,
    path: PathBuf,
    backend: GitBackend,
    history: Option<Vec<i64>>,
    is_root: bool,
}

impl CommitSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, backend: GitBackend) -> Self {
        Self::with_progress(label, path, backend, false)
    }

    pub fn with_progress(
        label: impl Into<String>,
        path: impl Into<PathBuf>,
        backend: GitBackend,
        show_progress: bool,
    ) -> Self {
        let label = label.into();
        let path = path.into();

        let history = match backend {
            GitBackend::Gix if path.exists() => match load_commit_times(&path, show_progress) {
                Ok(times) => Some(times),
                Err(e) => {
                    tracing::debug!(repo = %path.display(), error = %e, "commit history unavailable");
                    None
                }
            },
            _ => None,
        };
        let is_root = match backend {
            GitBackend::Gix => history.is_some(),
            GitBackend::Cli => path.exists() && cli::is_repo_root(&path),
        };

        Self {
            label,
            path,
            backend,
            history,
            is_root,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commits_on(&self, date: NaiveDate) -> u32 {
        if !self.is_root {
            return 0;
        }

        match self.backend {
            GitBackend::Gix => {
                let (Some(times), Some((start, end))) = (&self.history, local_day_bounds(date)) else {
                    return 0;
                };
                count_in_range(times, start.timestamp(), end.timestamp())
            }
            GitBackend::Cli => cli::count_commits_on(&self.path, date).unwrap_or_else(|e| {
                tracing::debug!(repo = %self.path.display(), %date, error = %e, "git log failed");
                0
            }),
        }
    }
}

impl ActivitySource for CommitSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn lookup(&self, date: NaiveDate) -> Contribution {
        Contribution {
            commits: self.commits_on(date),
            ..Contribution::default()
        }
    }
}
