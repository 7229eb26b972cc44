use crate::config::{Config, Settings};
use crate::error::HeatlogError;
use crate::git::GitBackend;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heatlog")]
#[command(about = "Activity heatmap for a markdown diary and blog site")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Site root (defaults to the current directory)")]
    pub root: Option<PathBuf>,

    #[arg(long, global = true, help = "Path to a heatlog.toml config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Directory of diary entries")]
    pub diary_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Directory of blog posts")]
    pub blog_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Directory of daily memory notes")]
    pub memory_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Path to the workspace git repository")]
    pub workspace_repo: Option<PathBuf>,

    #[arg(long, global = true, help = "Path to the blog git repository")]
    pub blog_repo: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "How commits are counted")]
    pub git_backend: Option<GitBackend>,

    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate activity for a trailing window of days
    Heat {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, help = "Number of days in the window")]
        days: Option<u32>,

        #[arg(long, help = "Last day of the window (YYYY-MM-DD, defaults to today)")]
        end: Option<String>,
    },
    /// Show the record for a single day
    Day {
        #[arg(help = "Day to inspect (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// List blog tags, or the posts carrying one tag
    Tags {
        #[arg(help = "Only list posts with this tag")]
        tag: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = self.common.load_config()?;
        crate::logging::init(&config.logging, self.common.verbose);

        match self.command {
            Commands::Heat { json, ndjson, days, end } => {
                crate::heat::exec(self.common, json, ndjson, days, end)
            }
            Commands::Day { date, json } => crate::heat::exec_day(self.common, date, json),
            Commands::Tags { tag, json } => crate::tags::exec(self.common, tag, json),
        }
    }
}

impl CommonArgs {
    fn root_dir(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        let root = self.root_dir()?;
        Ok(Config::load(self.config.as_deref(), &root)?)
    }

    /// Config file values with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let root = self.root_dir()?;
        let mut config = self.load_config()?;

        if self.root.is_some() {
            config.root = None;
        }
        if let Some(dir) = &self.diary_dir {
            config.sources.diary_dir = dir.clone();
        }
        if let Some(dir) = &self.blog_dir {
            config.sources.blog_dir = dir.clone();
        }
        if let Some(dir) = &self.memory_dir {
            config.sources.memory_dir = dir.clone();
        }
        if let Some(repo) = &self.workspace_repo {
            config.repos.workspace = Some(repo.clone());
        }
        if let Some(repo) = &self.blog_repo {
            config.repos.blog = Some(repo.clone());
        }
        if let Some(backend) = self.git_backend {
            config.repos.backend = backend;
        }

        Ok(Settings::from_config(&config, &root))
    }
}

pub fn parse_date_arg(input: &str) -> std::result::Result<NaiveDate, HeatlogError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| HeatlogError::InvalidDate(format!("'{input}': {e}")))
}
