use crate::error::{HeatlogError, Result};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`.
    ///
    /// A directory nested inside some other work tree is rejected rather
    /// than resolved to the enclosing repository.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = discover(path)?;
        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        if !super::same_dir(path, &root) {
            return Err(HeatlogError::GitRepo(format!(
                "{} is not a repository root (enclosing work tree is {})",
                path.display(),
                root.display()
            )));
        }

        Ok(Self { repo, path: root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Committer timestamps (unix seconds) of every commit reachable from
    /// HEAD, sorted ascending.
    pub fn commit_times(&self, show_progress: bool) -> Result<Vec<i64>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut times = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = if show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading history of {}", self.path.display()));

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            times.push(commit.time()?.seconds);

            for pid in commit.parent_ids() {
                stack.push_back(pid.detach());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        times.sort_unstable();
        tracing::debug!(repo = %self.path.display(), commits = times.len(), "history loaded");
        Ok(times)
    }
}

/// Commit times of the repository at `path`, or an error describing why
/// they could not be read.
pub fn load_commit_times(path: &Path, show_progress: bool) -> Result<Vec<i64>> {
    if !path.exists() {
        return Err(HeatlogError::GitRepo(format!(
            "repository path does not exist: {}",
            path.display()
        )));
    }
    GitRepo::open(path)?.commit_times(show_progress)
}

/// Number of entries of the sorted `times` within `[start, end)`.
pub fn count_in_range(times: &[i64], start: i64, end: i64) -> u32 {
    let lo = times.partition_point(|&t| t < start);
    let hi = times.partition_point(|&t| t < end);
    hi.saturating_sub(lo) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_support::{commit_at, has_git, init_git_repo};
    use tempfile::tempdir;

    #[test]
    fn count_in_range_is_half_open() {
        let times = [10, 20, 20, 30, 40];
        assert_eq!(count_in_range(&times, 20, 30), 2);
        assert_eq!(count_in_range(&times, 0, 100), 5);
        assert_eq!(count_in_range(&times, 41, 100), 0);
        assert_eq!(count_in_range(&times, 30, 20), 0);
        assert_eq!(count_in_range(&[], 0, 100), 0);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_commit_times(&dir.path().join("gone"), false).is_err());
    }

    #[test]
    fn nested_directory_is_not_a_repository() {
        if !has_git() {
            return;
        }
        let dir = tempdir().unwrap();
        init_git_repo(dir.path());
        commit_at(dir.path(), "a.txt", "2026-02-27T09:00:00");
        let nested = dir.path().join("content").join("blog");
        std::fs::create_dir_all(&nested).unwrap();

        assert!(matches!(GitRepo::open(&nested), Err(HeatlogError::GitRepo(_))));
        assert!(load_commit_times(&nested, false).is_err());
        assert_eq!(load_commit_times(dir.path(), false).unwrap().len(), 1);
    }

    #[test]
    fn reads_every_commit_time() {
        if !has_git() {
            return;
        }
        let dir = tempdir().unwrap();
        init_git_repo(dir.path());
        commit_at(dir.path(), "a.txt", "2026-02-27T09:00:00");
        commit_at(dir.path(), "b.txt", "2026-02-27T18:00:00");
        commit_at(dir.path(), "c.txt", "2026-02-28T10:00:00");

        let times = load_commit_times(dir.path(), false).unwrap();
        assert_eq!(times.len(), 3);
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_repository_has_no_history() {
        if !has_git() {
            return;
        }
        let dir = tempdir().unwrap();
        init_git_repo(dir.path());
        let times = load_commit_times(dir.path(), false).unwrap();
        assert!(times.is_empty());
    }
}
