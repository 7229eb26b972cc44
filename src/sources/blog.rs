use super::ActivitySource;
use crate::content::PostIndex;
use crate::model::Contribution;
use chrono::NaiveDate;
use std::path::Path;

/// Blog posts keyed on their `date` frontmatter field.
#[derive(Debug, Clone, Default)]
pub struct BlogSource {
    index: PostIndex,
}

impl BlogSource {
    pub fn load(dir: &Path) -> Self {
        Self::from_index(PostIndex::load(dir))
    }

    pub fn from_index(index: PostIndex) -> Self {
        Self { index }
    }
}

impl ActivitySource for BlogSource {
    fn name(&self) -> &str {
        "blog"
    }

    fn lookup(&self, date: NaiveDate) -> Contribution {
        let mut contribution = Contribution::empty();
        // sorted newest first; list same-day posts by slug
        let mut posts: Vec<_> = self
            .index
            .sorted()
            .iter()
            .filter(|p| p.date == Some(date))
            .collect();
        posts.sort_by(|a, b| a.slug.cmp(&b.slug));

        for post in posts {
            contribution.count += 1;
            contribution.slugs.push(post.slug.clone());
            contribution.summaries.push(format!("📖 {}", post.title));
        }
        contribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn counts_posts_on_date() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.md"), "---\ntitle: One\ndate: 2026-02-27\n---\n").unwrap();
        fs::write(dir.path().join("two.md"), "---\ntitle: Two\ndate: 2026-02-27\n---\n").unwrap();
        fs::write(dir.path().join("other.md"), "---\ntitle: Other\ndate: 2026-02-26\n---\n").unwrap();

        let hit = BlogSource::load(dir.path()).lookup(day("2026-02-27"));
        assert_eq!(hit.count, 2);
        assert_eq!(hit.summaries, vec!["📖 One", "📖 Two"]);
    }

    #[test]
    fn missing_directory_contributes_nothing() {
        let dir = tempdir().unwrap();
        let source = BlogSource::load(&dir.path().join("blog"));
        assert!(source.lookup(day("2026-02-27")).is_empty());
    }
}
