use crate::cli::CommonArgs;
use crate::content::PostIndex;
use crate::model::{Post, TagsOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, tag: Option<String>, json: bool) -> anyhow::Result<()> {
    let settings = common.settings().context("Failed to load configuration")?;
    let index = PostIndex::load(&settings.blog_dir);

    let posts: Vec<Post> = match tag.as_deref() {
        Some(t) => index.by_tag(t).cloned().collect(),
        None => index.sorted().to_vec(),
    };

    if json {
        let output = TagsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            tags: index.all_tags(),
            tag,
            posts,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match tag {
        Some(t) => output_posts(&t, &posts),
        None => output_tags(&index),
    }
    Ok(())
}

fn output_tags(index: &PostIndex) {
    let tags = index.all_tags();
    if tags.is_empty() {
        println!("No tags found");
        return;
    }

    println!("{:<30} {:>6}", style("Tag").bold(), style("Posts").bold());
    println!("{}", "─".repeat(37));
    for entry in &tags {
        println!("{:<30} {:>6}", entry.tag, entry.post_count);
    }
    println!("\n{} tags across {} posts", style(tags.len()).cyan(), style(index.len()).cyan());
}

fn output_posts(tag: &str, posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts tagged {}", style(tag).yellow());
        return;
    }

    println!("{} {}", style("Posts tagged").bold(), style(tag).yellow());
    println!("{}", "─".repeat(50));
    for post in posts {
        let date = post
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!("{}  {}  {}", style(date).dim(), post.title, style(&post.slug).dim());
    }
}
