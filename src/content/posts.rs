use super::{load_dir, split_list, MarkdownFile};
use crate::model::{Post, TagEntry};
use crate::util::parse_day;
use std::collections::BTreeMap;
use std::path::Path;

/// Blog posts read from one directory, newest first.
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    pub fn load(dir: &Path) -> Self {
        Self::from_posts(load_dir(dir).into_iter().map(post_from_file).collect())
    }

    pub fn from_posts(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        Self { posts }
    }

    pub fn sorted(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn all_tags(&self) -> Vec<TagEntry> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for post in &self.posts {
            for tag in &post.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(tag, post_count)| TagEntry {
                tag: tag.to_string(),
                post_count,
            })
            .collect()
    }

    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |p| p.tags.iter().any(|t| t == tag))
    }
}

fn post_from_file(file: MarkdownFile) -> Post {
    let fm = &file.frontmatter;
    let date = fm.non_empty("date").and_then(|raw| {
        let parsed = parse_day(raw);
        if parsed.is_none() {
            tracing::warn!(path = %file.path.display(), date = raw, "unparseable post date");
        }
        parsed
    });

    Post {
        title: fm.non_empty("title").unwrap_or(file.slug.as_str()).to_string(),
        date,
        tags: fm.get("tags").map(split_list).unwrap_or_default(),
        summary: fm.non_empty("summary").map(str::to_string),
        slug: file.slug,
    }
}
