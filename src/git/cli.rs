use crate::error::{HeatlogError, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Top level of the work tree `repo` belongs to, as reported by git.
pub fn toplevel(repo: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| HeatlogError::GitCommand(format!("failed to spawn git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HeatlogError::GitCommand(format!(
            "git rev-parse exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(PathBuf::from(String::from_utf8_lossy(&output.stdout).trim()))
}

/// True when `repo` is itself the root of a work tree, not a directory
/// nested inside one.
pub fn is_repo_root(repo: &Path) -> bool {
    match toplevel(repo) {
        Ok(top) => crate::git::same_dir(repo, &top),
        Err(e) => {
            tracing::debug!(repo = %repo.display(), error = %e, "not a git work tree");
            false
        }
    }
}

/// Counts commits on `date` by running `git log` in `repo`.
///
/// Bounds are passed without a zone so git reads them as local time.
pub fn count_commits_on(repo: &Path, date: NaiveDate) -> Result<u32> {
    let since = format!("--since={date}T00:00:00");
    let until = format!("--until={date}T23:59:59");

    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["log", "--oneline", "--no-color", &since, &until])
        .output()
        .map_err(|e| HeatlogError::GitCommand(format!("failed to spawn git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HeatlogError::GitCommand(format!(
            "git log exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().filter(|l| !l.trim().is_empty()).count() as u32)
}
