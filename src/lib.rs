pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod git;
pub mod heat;
pub mod logging;
pub mod model;
pub mod sources;
pub mod tags;
pub mod util;

pub use error::{HeatlogError, Result};
pub use heat::{generate_heatmap, Aggregator};
pub use model::{DayRecord, DayWindow};
