use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Raw commits that collapse into one activity unit.
pub const COMMITS_PER_UNIT: u32 = 5;

pub fn level_for(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => 4,
    }
}

pub fn git_activity(workspace_commits: u32, blog_commits: u32) -> u32 {
    workspace_commits.saturating_add(blog_commits) / COMMITS_PER_UNIT
}

/// Parses a frontmatter date value. Accepts `YYYY-MM-DD`, RFC3339 and
/// `YYYY-MM-DDTHH:MM[:SS]`; anything else is `None`.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Local midnight of `date` and of the following day, as UTC instants.
pub fn local_day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let next = date.succ_opt()?;
    let start = local_midnight(date)?;
    let end = local_midnight(next)?;
    Some((start, end))
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(0, 0, 0)?;
    // DST gaps can swallow midnight; take the earliest valid instant.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn local_date_of(secs: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.with_timezone(&Local).date_naive())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
