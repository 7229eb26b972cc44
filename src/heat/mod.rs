pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{generate_heatmap, Aggregator, SummaryOptions};
pub use exec::{exec, exec_day};
pub use output::{output_calendar, output_day, output_json, output_ndjson};
