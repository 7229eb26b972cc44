use crate::error::HeatlogError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One calendar cell of the activity heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
    pub summary: String,
    pub has_diary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diary_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diary_slugs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diary_url: Option<String>,
    pub has_blog: bool,
    pub workspace_commits: u32,
    pub blog_commits: u32,
}

/// What a single source adds to one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    pub count: u32,
    pub summaries: Vec<String>,
    pub slugs: Vec<String>,
    pub commits: u32,
}

impl Contribution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.summaries.is_empty() && self.commits == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub end: NaiveDate,
    pub window: u32,
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    pub post_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub tag: Option<String>,
    pub tags: Vec<TagEntry>,
    pub posts: Vec<Post>,
}

/// Longest window `heat` will build, about ten years.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// Inclusive range of calendar days, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub end: NaiveDate,
    pub days: u32,
}

impl DayWindow {
    pub fn new(end: NaiveDate, days: u32) -> Self {
        Self { end, days }
    }

    /// Like `new`, but rejects windows longer than `MAX_WINDOW_DAYS` or
    /// reaching back past the earliest representable date.
    pub fn checked(end: NaiveDate, days: u32) -> crate::Result<Self> {
        if days > MAX_WINDOW_DAYS {
            return Err(HeatlogError::InvalidDate(format!(
                "window of {days} days exceeds the limit of {MAX_WINDOW_DAYS}"
            )));
        }
        let back = u64::from(days.saturating_sub(1));
        if end.checked_sub_days(chrono::Days::new(back)).is_none() {
            return Err(HeatlogError::InvalidDate(format!(
                "window of {days} days ending {end} starts before the earliest date"
            )));
        }
        Ok(Self { end, days })
    }

    pub fn start(&self) -> NaiveDate {
        let back = self.days.saturating_sub(1) as u64;
        self.end
            .checked_sub_days(chrono::Days::new(back))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start();
        start.iter_days().take(self.days as usize)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.days > 0 && *date >= self.start() && *date <= self.end
    }
}
