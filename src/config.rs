//! Configuration loading
//!
//! Lookup order for the config file:
//! 1. an explicit `--config` path (must exist)
//! 2. `<root>/heatlog.toml`
//! 3. `$XDG_CONFIG_HOME/heatlog/config.toml` (~/.config/heatlog/config.toml)
//!
//! With no file present every value falls back to its default. Relative
//! paths resolve against the site root.

use crate::error::{HeatlogError, Result};
use crate::git::GitBackend;
use crate::sources::memory::DEFAULT_MARKERS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "heatlog.toml";

/// Returns XDG_CONFIG_HOME or the platform config directory.
fn xdg_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Site root; relative paths below resolve against it
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub repos: ReposConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default = "default_diary_dir")]
    pub diary_dir: PathBuf,
    #[serde(default = "default_blog_dir")]
    pub blog_dir: PathBuf,
    #[serde(default = "default_memory_dir")]
    pub memory_dir: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            diary_dir: default_diary_dir(),
            blog_dir: default_blog_dir(),
            memory_dir: default_memory_dir(),
        }
    }
}

fn default_diary_dir() -> PathBuf {
    PathBuf::from("app/diary/posts")
}

fn default_blog_dir() -> PathBuf {
    PathBuf::from("content/blog")
}

fn default_memory_dir() -> PathBuf {
    PathBuf::from("memory")
}

/// The two repositories whose commits feed the heatmap.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReposConfig {
    /// Defaults to the site root
    #[serde(default)]
    pub workspace: Option<PathBuf>,
    /// Defaults to the blog directory
    #[serde(default)]
    pub blog: Option<PathBuf>,
    #[serde(default = "default_workspace_label")]
    pub workspace_label: String,
    #[serde(default = "default_blog_label")]
    pub blog_label: String,
    #[serde(default)]
    pub backend: GitBackend,
}

impl Default for ReposConfig {
    fn default() -> Self {
        Self {
            workspace: None,
            blog: None,
            workspace_label: default_workspace_label(),
            blog_label: default_blog_label(),
            backend: GitBackend::default(),
        }
    }
}

fn default_workspace_label() -> String {
    "workspace".to_string()
}

fn default_blog_label() -> String {
    "blog".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapConfig {
    #[serde(default = "default_days")]
    pub days: u32,
    /// Summary used for days without activity
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_diary_url_prefix")]
    pub diary_url_prefix: String,
    /// Phrases that mark the events section of a memory note
    #[serde(default = "default_memory_markers")]
    pub memory_markers: Vec<String>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            placeholder: default_placeholder(),
            diary_url_prefix: default_diary_url_prefix(),
            memory_markers: default_memory_markers(),
        }
    }
}

fn default_days() -> u32 {
    365
}

fn default_placeholder() -> String {
    "No activity".to_string()
}

fn default_diary_url_prefix() -> String {
    "/diary/".to_string()
}

fn default_memory_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            HeatlogError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
            .map_err(|e| HeatlogError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads the first config file found, or defaults when there is none.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = [
            Some(root.join(FILE_NAME)),
            xdg_config_home().map(|d| d.join("heatlog").join("config.toml")),
        ];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}

/// Fully resolved inputs of one heatmap run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub diary_dir: PathBuf,
    pub blog_dir: PathBuf,
    pub memory_dir: PathBuf,
    pub workspace_repo: PathBuf,
    pub blog_repo: PathBuf,
    pub workspace_label: String,
    pub blog_label: String,
    pub backend: GitBackend,
    pub days: u32,
    pub placeholder: String,
    pub diary_url_prefix: String,
    pub memory_markers: Vec<String>,
}

impl Settings {
    pub fn from_config(config: &Config, root: &Path) -> Self {
        let root = config
            .root
            .as_deref()
            .map(|r| resolve(root, r))
            .unwrap_or_else(|| root.to_path_buf());
        let blog_dir = resolve(&root, &config.sources.blog_dir);

        Self {
            diary_dir: resolve(&root, &config.sources.diary_dir),
            memory_dir: resolve(&root, &config.sources.memory_dir),
            workspace_repo: config
                .repos
                .workspace
                .as_deref()
                .map(|p| resolve(&root, p))
                .unwrap_or_else(|| root.clone()),
            blog_repo: config
                .repos
                .blog
                .as_deref()
                .map(|p| resolve(&root, p))
                .unwrap_or_else(|| blog_dir.clone()),
            blog_dir,
            workspace_label: config.repos.workspace_label.clone(),
            blog_label: config.repos.blog_label.clone(),
            backend: config.repos.backend,
            days: config.heatmap.days,
            placeholder: config.heatmap.placeholder.clone(),
            diary_url_prefix: config.heatmap.diary_url_prefix.clone(),
            memory_markers: config.heatmap.memory_markers.clone(),
            root,
        }
    }
}

pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
