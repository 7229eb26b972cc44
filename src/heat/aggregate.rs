use crate::config::Settings;
use crate::model::{DayRecord, DayWindow};
use crate::sources::{ActivitySource, BlogSource, CommitSource, DiarySource, MemorySource};
use crate::util::{git_activity, level_for};
use chrono::NaiveDate;

/// Presentation knobs that do not affect counting.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub placeholder: String,
    pub diary_url_prefix: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            placeholder: "No activity".to_string(),
            diary_url_prefix: "/diary/".to_string(),
        }
    }
}

/// Combines every source into one [`DayRecord`] per day.
pub struct Aggregator {
    diary: DiarySource,
    blog: BlogSource,
    memory: MemorySource,
    workspace: CommitSource,
    blog_repo: CommitSource,
    options: SummaryOptions,
}

impl Aggregator {
    pub fn new(
        diary: DiarySource,
        blog: BlogSource,
        memory: MemorySource,
        workspace: CommitSource,
        blog_repo: CommitSource,
        options: SummaryOptions,
    ) -> Self {
        Self {
            diary,
            blog,
            memory,
            workspace,
            blog_repo,
            options,
        }
    }

    pub fn from_settings(settings: &Settings, show_progress: bool) -> Self {
        Self::new(
            DiarySource::load(&settings.diary_dir),
            BlogSource::load(&settings.blog_dir),
            MemorySource::new(&settings.memory_dir, settings.memory_markers.clone()),
            CommitSource::with_progress(
                &settings.workspace_label,
                &settings.workspace_repo,
                settings.backend,
                show_progress,
            ),
            CommitSource::with_progress(
                &settings.blog_label,
                &settings.blog_repo,
                settings.backend,
                show_progress,
            ),
            SummaryOptions {
                placeholder: settings.placeholder.clone(),
                diary_url_prefix: settings.diary_url_prefix.clone(),
            },
        )
    }

    pub fn day(&self, date: NaiveDate) -> DayRecord {
        let diary = self.diary.lookup(date);
        let memory = self.memory.lookup(date);
        let blog = self.blog.lookup(date);
        let workspace_commits = self.workspace.lookup(date).commits;
        let blog_commits = self.blog_repo.lookup(date).commits;
        tracing::trace!(
            %date,
            diary = diary.count,
            memory = memory.count,
            blog = blog.count,
            workspace_commits,
            blog_commits,
            "day sources"
        );

        let count = diary.count + memory.count + blog.count + git_activity(workspace_commits, blog_commits);

        let mut lines: Vec<String> = diary
            .summaries
            .into_iter()
            .chain(memory.summaries)
            .chain(blog.summaries)
            .collect();
        for (source, commits) in [(&self.workspace, workspace_commits), (&self.blog_repo, blog_commits)] {
            if commits > 0 {
                lines.push(format!("💻 {}: {} commits", source.label(), commits));
            }
        }

        let summary = if lines.is_empty() {
            self.options.placeholder.clone()
        } else {
            lines.join("\n")
        };

        let diary_slug = diary.slugs.last().cloned();
        let diary_url = diary_slug
            .as_ref()
            .map(|slug| format!("{}{}", self.options.diary_url_prefix, slug));

        DayRecord {
            date,
            count,
            level: level_for(count),
            summary,
            has_diary: diary.count > 0,
            diary_slug,
            diary_slugs: diary.slugs,
            diary_url,
            has_blog: blog.count > 0,
            workspace_commits,
            blog_commits,
        }
    }

    /// One record per day of `window`, oldest first.
    pub fn window(&self, window: DayWindow) -> Vec<DayRecord> {
        let records: Vec<_> = window.dates().map(|date| self.day(date)).collect();
        tracing::info!(
            start = %window.start(),
            end = %window.end,
            days = records.len(),
            active = records.iter().filter(|r| r.count > 0).count(),
            "heatmap aggregated"
        );
        records
    }
}

/// Aggregates `days` days ending on `end` from the configured sources.
pub fn generate_heatmap(settings: &Settings, end: NaiveDate, days: u32) -> Vec<DayRecord> {
    Aggregator::from_settings(settings, false).window(DayWindow::new(end, days))
}
