pub mod frontmatter;
pub mod posts;

pub use frontmatter::{parse as parse_frontmatter, split_list, Frontmatter, FrontmatterError};
pub use posts::PostIndex;

use crate::error::{HeatlogError, Result};
use std::path::{Path, PathBuf};

/// A parsed markdown file and the slug derived from its file name.
#[derive(Debug, Clone)]
pub struct MarkdownFile {
    pub path: PathBuf,
    pub slug: String,
    pub frontmatter: Frontmatter,
}

/// Lists `*.md` files directly inside `dir`, sorted by file name.
///
/// A missing directory is an empty listing.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "content directory not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_markdown(path: &Path) -> Result<MarkdownFile> {
    let text = std::fs::read_to_string(path)?;
    let frontmatter = frontmatter::parse(&text).map_err(|source| HeatlogError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(MarkdownFile {
        path: path.to_path_buf(),
        slug,
        frontmatter,
    })
}

/// Reads every markdown file in `dir`, skipping the ones that fail to parse.
pub fn load_dir(dir: &Path) -> Vec<MarkdownFile> {
    let files = match markdown_files(dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to list content directory");
            return Vec::new();
        }
    };

    files
        .iter()
        .filter_map(|path| match read_markdown(path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping markdown file");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempdir().unwrap();
        let files = markdown_files(&dir.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn lists_only_markdown_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "---\n---\n").unwrap();
        fs::write(dir.path().join("a.md"), "---\n---\n").unwrap();
        fs::write(dir.path().join("c.mdx"), "---\n---\n").unwrap();
        fs::create_dir(dir.path().join("d.md")).unwrap();

        let names: Vec<_> = markdown_files(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn read_error_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.md");
        fs::write(&path, "just text").unwrap();

        let err = read_markdown(&path).unwrap_err();
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn load_dir_skips_broken_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.md"), "---\ntitle: ok\n---\nbody").unwrap();
        fs::write(dir.path().join("broken.md"), "no header").unwrap();

        let files = load_dir(dir.path());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].slug, "good");
        assert_eq!(files[0].frontmatter.get("title"), Some("ok"));
    }
}
