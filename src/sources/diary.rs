use super::ActivitySource;
use crate::content::{load_dir, MarkdownFile};
use crate::model::Contribution;
use crate::util::{parse_day, truncate_chars};
use chrono::NaiveDate;
use std::path::Path;

const FALLBACK_CHARS: usize = 50;

#[derive(Debug, Clone)]
struct DiaryEntry {
    slug: String,
    published: Option<NaiveDate>,
    line: Option<String>,
}

/// Diary entries keyed on their `publishedAt` frontmatter field.
#[derive(Debug, Clone, Default)]
pub struct DiarySource {
    entries: Vec<DiaryEntry>,
}

impl DiarySource {
    pub fn load(dir: &Path) -> Self {
        let entries: Vec<_> = load_dir(dir).into_iter().map(entry_from_file).collect();
        tracing::debug!(dir = %dir.display(), entries = entries.len(), "diary loaded");
        Self { entries }
    }
}

fn entry_from_file(file: MarkdownFile) -> DiaryEntry {
    let fm = &file.frontmatter;
    let published = fm.non_empty("publishedAt").and_then(parse_day);
    let line = fm
        .non_empty("summary")
        .map(str::to_string)
        .or_else(|| {
            fm.body
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .map(|l| truncate_chars(l, FALLBACK_CHARS))
        })
        .map(|text| format!("📝 {text}"));

    DiaryEntry {
        slug: file.slug,
        published,
        line,
    }
}

impl ActivitySource for DiarySource {
    fn name(&self) -> &str {
        "diary"
    }

    fn lookup(&self, date: NaiveDate) -> Contribution {
        let mut contribution = Contribution::empty();
        for entry in self.entries.iter().filter(|e| e.published == Some(date)) {
            contribution.count += 1;
            contribution.slugs.push(entry.slug.clone());
            if let Some(line) = &entry.line {
                contribution.summaries.push(line.clone());
            }
        }
        contribution
    }
}
