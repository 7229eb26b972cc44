use crate::model::{DayRecord, HeatmapOutput, SCHEMA_VERSION};
use chrono::{Datelike, NaiveDate, Utc};
use console::style;
use anyhow::Result;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn build_output(records: &[DayRecord], end: NaiveDate) -> HeatmapOutput {
    HeatmapOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        end,
        window: records.len() as u32,
        days: records.to_vec(),
    }
}

pub fn output_json(records: &[DayRecord], end: NaiveDate) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&build_output(records, end))?);
    Ok(())
}

pub fn output_ndjson(records: &[DayRecord]) -> Result<()> {
    for record in records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

fn cell(level: u8) -> console::StyledObject<&'static str> {
    match level {
        0 => style("·").dim(),
        1 => style("▪").green(),
        2 => style("■").green(),
        3 => style("■").green().bold(),
        _ => style("█").green().bold(),
    }
}

/// Weeks as columns, weekdays as rows, like a contribution calendar.
pub fn calendar_rows(records: &[DayRecord]) -> Vec<Vec<Option<u8>>> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let offset = first.date.weekday().num_days_from_monday() as usize;
    let weeks = (offset + records.len()).div_ceil(7);

    let mut rows = vec![vec![None; weeks]; 7];
    for (i, record) in records.iter().enumerate() {
        let slot = offset + i;
        rows[slot % 7][slot / 7] = Some(record.level);
    }
    rows
}

pub fn output_calendar(records: &[DayRecord]) -> Result<()> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        println!("No days to display");
        return Ok(());
    };

    println!(
        "{} {} → {}",
        style("Activity Heatmap").bold(),
        first.date,
        last.date
    );
    println!("{}", "─".repeat(50));

    for (weekday, row) in WEEKDAYS.iter().zip(calendar_rows(records)) {
        let cells: Vec<String> = row
            .into_iter()
            .map(|level| match level {
                Some(level) => cell(level).to_string(),
                None => " ".to_string(),
            })
            .collect();
        println!("{} {}", style(weekday).dim(), cells.join(""));
    }

    let total: u32 = records.iter().map(|r| r.count).sum();
    let active = records.iter().filter(|r| r.count > 0).count();
    let diaries = records.iter().filter(|r| r.has_diary).count();
    let posts = records.iter().filter(|r| r.has_blog).count();
    let commits: u32 = records
        .iter()
        .map(|r| r.workspace_commits + r.blog_commits)
        .sum();

    println!("\n{}", style("Legend").bold());
    println!(
        "  less {}{}{}{}{} more",
        cell(0),
        cell(1),
        cell(2),
        cell(3),
        cell(4)
    );
    println!(
        "\nPast {} days: {} activity, {} active days, {} diary days, {} blog days, {} commits",
        style(records.len()).cyan(),
        style(total).green(),
        style(active).cyan(),
        style(diaries).yellow(),
        style(posts).yellow(),
        style(commits).blue()
    );
    Ok(())
}

pub fn output_day(record: &DayRecord) -> Result<()> {
    println!(
        "{} {} (count {}, level {})",
        style(record.date).bold(),
        cell(record.level),
        record.count,
        record.level
    );
    println!("{}", "─".repeat(50));
    println!("{}", record.summary);
    if let Some(url) = &record.diary_url {
        println!("\nDiary: {}", style(url).underlined());
    }
    if record.workspace_commits + record.blog_commits > 0 {
        println!(
            "Commits: {} workspace, {} blog",
            record.workspace_commits, record.blog_commits
        );
    }
    Ok(())
}
