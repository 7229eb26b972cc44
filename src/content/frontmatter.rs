use std::collections::BTreeMap;
use thiserror::Error;

const DELIMITER: &str = "---";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("missing opening `---` delimiter")]
    MissingOpening,
    #[error("missing closing `---` delimiter")]
    MissingClosing,
}

/// Flat `key: value` header of a markdown file plus the body after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub fields: BTreeMap<String, String>,
    pub body: String,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get) but treats an empty value as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// Splits `text` into header fields and body.
///
/// The header is whatever sits between the first `---` and the next one.
/// Text before the opening marker is kept as part of the body.
pub fn parse(text: &str) -> Result<Frontmatter, FrontmatterError> {
    let open = text.find(DELIMITER).ok_or(FrontmatterError::MissingOpening)?;
    let after_open = open + DELIMITER.len();
    let close = text[after_open..]
        .find(DELIMITER)
        .map(|i| after_open + i)
        .ok_or(FrontmatterError::MissingClosing)?;

    let block = &text[after_open..close];
    let mut body = String::with_capacity(text.len());
    body.push_str(&text[..open]);
    body.push_str(&text[close + DELIMITER.len()..]);

    Ok(Frontmatter {
        fields: parse_block(block),
        body: body.trim().to_string(),
    })
}

fn parse_block(block: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for line in block.trim().lines() {
        let (key, value) = match line.split_once(": ") {
            Some((k, v)) => (k.trim(), unquote(v.trim())),
            None => (line.trim(), ""),
        };
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && (value.starts_with('"') || value.starts_with('\''))
        && (value.ends_with('"') || value.ends_with('\''));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Reads an inline list value such as `[rust, "git"]` or `rust, git`.
pub fn split_list(value: &str) -> Vec<String> {
    let inner = value
        .trim()
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|item| unquote(item.trim()).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
