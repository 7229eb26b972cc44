use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit_at(dir: &Path, name: &str, when: &str) {
    fs::write(dir.join(name), name).unwrap();
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-q", "-m", &format!("add {name}")])
        .env("GIT_AUTHOR_DATE", when)
        .env("GIT_COMMITTER_DATE", when)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn write(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

/// A site with one diary entry, one blog post and one memory note on
/// 2026-02-27. Repositories point at paths that do not exist.
fn fixture_site(root: &Path) {
    write(
        &root.join("app/diary/posts/first-day.md"),
        "---\ntitle: First day\npublishedAt: 2026-02-27\nsummary: \"test entry\"\n---\n\nHello.\n",
    );
    write(
        &root.join("content/blog/launch.md"),
        "---\ntitle: \"Launch: the blog\"\ndate: 2026-02-27\ntags: [rust, blog]\n---\n\nPost body.\n",
    );
    write(
        &root.join("content/blog/older.md"),
        "---\ntitle: Older\ndate: 2026-01-10\ntags: [rust]\n---\n",
    );
    write(
        &root.join("memory/2026-02-27.md"),
        "# 2026-02-27\n\n## 🎯 Core Events\n\n### Wrote the heatmap\n\n## Notes\n",
    );
    write(
        &root.join("heatlog.toml"),
        "[repos]\nworkspace = \"no-such-workspace\"\nblog = \"no-such-blog\"\n",
    );
}

fn heatlog(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("heatlog").unwrap();
    cmd.current_dir(root).arg("--root").arg(root);
    cmd
}

#[test]
fn heat_json_outputs_full_window() {
    let dir = tempdir().unwrap();
    fixture_site(dir.path());

    let out = heatlog(dir.path())
        .args(["heat", "--json", "--days", "10", "--end", "2026-03-01"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 10);
    assert_eq!(v["window"], 10);
    assert_eq!(days[0]["date"], "2026-02-20");
    assert_eq!(days[9]["date"], "2026-03-01");

    let hit = days.iter().find(|d| d["date"] == "2026-02-27").unwrap();
    assert_eq!(hit["count"], 3);
    assert_eq!(hit["level"], 2);
    assert_eq!(hit["hasDiary"], true);
    assert_eq!(hit["diarySlug"], "first-day");
    assert_eq!(hit["diaryUrl"], "/diary/first-day");
    assert_eq!(hit["hasBlog"], true);
    assert_eq!(hit["workspaceCommits"], 0);
    assert_eq!(hit["blogCommits"], 0);
    assert_eq!(
        hit["summary"],
        "📝 test entry\n🎯 Wrote the heatmap\n📖 Launch: the blog"
    );

    let quiet = days.iter().find(|d| d["date"] == "2026-02-28").unwrap();
    assert_eq!(quiet["count"], 0);
    assert_eq!(quiet["level"], 0);
    assert_eq!(quiet["summary"], "No activity");
    assert_eq!(quiet["hasDiary"], false);
    assert!(quiet.get("diarySlug").is_none());
}

#[test]
fn heat_ndjson_emits_one_record_per_line() {
    let dir = tempdir().unwrap();
    fixture_site(dir.path());

    let out = heatlog(dir.path())
        .args(["heat", "--ndjson", "--days", "5", "--end", "2026-02-27"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    let last: serde_json::Value = serde_json::from_str(lines[4]).unwrap();
    assert_eq!(last["date"], "2026-02-27");
    assert_eq!(last["hasDiary"], true);
}

#[test]
fn missing_sources_still_produce_a_window() {
    let dir = tempdir().unwrap();

    let out = heatlog(dir.path())
        .args(["--workspace-repo", "nope", "--blog-repo", "nope"])
        .args(["heat", "--json", "--days", "3", "--end", "2026-02-27"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert!(days.iter().all(|d| d["count"] == 0 && d["summary"] == "No activity"));
}

#[test]
fn day_command_reports_single_record() {
    let dir = tempdir().unwrap();
    fixture_site(dir.path());

    let out = heatlog(dir.path())
        .args(["day", "2026-02-27", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["date"], "2026-02-27");
    assert_eq!(v["diarySlugs"], serde_json::json!(["first-day"]));
}

#[test]
fn invalid_dates_are_rejected() {
    let dir = tempdir().unwrap();
    heatlog(dir.path())
        .args(["day", "27/02/2026"])
        .assert()
        .failure();
}

#[test]
fn oversized_window_is_rejected() {
    let dir = tempdir().unwrap();
    heatlog(dir.path())
        .args(["heat", "--json", "--days", "4000000000", "--end", "2026-02-27"])
        .assert()
        .failure();
}

#[test]
fn tags_json_lists_tags_and_posts() {
    let dir = tempdir().unwrap();
    fixture_site(dir.path());

    let out = heatlog(dir.path())
        .args(["tags", "rust", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        v["tags"],
        serde_json::json!([
            {"tag": "blog", "post_count": 1},
            {"tag": "rust", "post_count": 2}
        ])
    );
    let slugs: Vec<_> = v["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(slugs, vec!["launch", "older"]);
}

#[test]
fn commits_show_up_in_summary() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let repo = dir.path().join("workspace");
    fs::create_dir(&repo).unwrap();
    init_git_repo(&repo);
    for i in 0..5 {
        commit_at(&repo, &format!("f{i}.txt"), &format!("2026-02-27T1{i}:00:00"));
    }

    for backend in ["gix", "cli"] {
        let out = heatlog(dir.path())
            .arg("--workspace-repo")
            .arg(&repo)
            .args(["--blog-repo", "nope", "--git-backend", backend])
            .args(["day", "2026-02-27", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["workspaceCommits"], 5, "backend {backend}");
        assert_eq!(v["blogCommits"], 0);
        assert_eq!(v["count"], 1);
        assert_eq!(v["summary"], "💻 workspace: 5 commits");
    }
}
