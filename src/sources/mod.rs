//! Per-day activity sources.
//!
//! Every source answers the same question for a calendar day and shares one
//! contract: a missing directory, file or repository contributes nothing
//! rather than failing the whole heatmap.

pub mod blog;
pub mod commits;
pub mod diary;
pub mod memory;

pub use blog::BlogSource;
pub use commits::CommitSource;
pub use diary::DiarySource;
pub use memory::MemorySource;

use crate::model::Contribution;
use chrono::NaiveDate;

pub trait ActivitySource {
    fn name(&self) -> &str;

    fn lookup(&self, date: NaiveDate) -> Contribution;
}
