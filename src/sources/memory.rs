use super::ActivitySource;
use crate::model::Contribution;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const DEFAULT_MARKERS: &[&str] = &["Core Events", "核心事件"];

/// Daily memory notes, one `<date>.md` file per day.
#[derive(Debug, Clone)]
pub struct MemorySource {
    dir: PathBuf,
    markers: Vec<String>,
}

impl MemorySource {
    pub fn new(dir: impl Into<PathBuf>, markers: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            markers,
        }
    }

    pub fn note_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{date}.md"))
    }

    fn read_note(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read memory note");
                None
            }
        }
    }
}

impl ActivitySource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn lookup(&self, date: NaiveDate) -> Contribution {
        let Some(text) = self.read_note(&self.note_path(date)) else {
            return Contribution::empty();
        };

        let summaries: Vec<String> = core_events(&text, &self.markers)
            .into_iter()
            .map(|title| format!("🎯 {title}"))
            .collect();

        Contribution {
            count: u32::from(!summaries.is_empty()),
            summaries,
            ..Contribution::default()
        }
    }
}

/// Sub-heading titles inside the first marked `## ` section of `text`.
pub fn core_events(text: &str, markers: &[String]) -> Vec<String> {
    let is_marked = |line: &str| markers.iter().any(|m| line.contains(m.as_str()));

    let mut events = Vec::new();
    let mut inside = false;

    for line in text.lines() {
        if line.starts_with("## ") {
            if is_marked(line) {
                inside = true;
                continue;
            }
            if inside {
                break;
            }
        }
        // Only the first `###` is removed; deeper headings keep their extra
        // hashes and a bare `###` still records an (empty) event.
        if inside && line.starts_with("###") {
            events.push(line.replacen("###", "", 1).trim().to_string());
        }
    }

    events
}
