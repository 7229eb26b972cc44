use super::{output_calendar, output_day, output_json, output_ndjson, Aggregator};
use crate::cli::CommonArgs;
use crate::model::DayWindow;
use anyhow::Context;
use chrono::NaiveDate;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool, days: Option<u32>, end: Option<String>) -> anyhow::Result<()> {
    let settings = common.settings().context("Failed to load configuration")?;
    let end = match end {
        Some(raw) => crate::cli::parse_date_arg(&raw)?,
        None => crate::util::today(),
    };
    let window = DayWindow::checked(end, days.unwrap_or(settings.days))?;

    // keep stderr quiet when the output is meant for another program
    let show_progress = !json && !ndjson;
    let aggregator = Aggregator::from_settings(&settings, show_progress);
    let records = aggregator.window(window);

    if json {
        output_json(&records, end)?;
    } else if ndjson {
        output_ndjson(&records)?;
    } else {
        output_calendar(&records)?;
    }

    Ok(())
}

pub fn exec_day(common: CommonArgs, date: String, json: bool) -> anyhow::Result<()> {
    let settings = common.settings().context("Failed to load configuration")?;
    let date: NaiveDate = crate::cli::parse_date_arg(&date)?;

    let aggregator = Aggregator::from_settings(&settings, !json);
    let record = aggregator.day(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        output_day(&record)?;
    }

    Ok(())
}
