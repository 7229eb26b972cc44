use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatlogError>;

#[derive(Error, Debug)]
pub enum HeatlogError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::discover::Error>),
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Git command failed: {0}")]
    GitCommand(String),
    #[error("Malformed frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: crate::content::FrontmatterError,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for HeatlogError {
    fn from(err: gix::discover::Error) -> Self {
        HeatlogError::Git(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for HeatlogError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        HeatlogError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for HeatlogError {
    fn from(err: gix::object::commit::Error) -> Self {
        HeatlogError::Commit(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for HeatlogError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        HeatlogError::HeadPeel(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for HeatlogError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        HeatlogError::RefFind(Box::new(err))
    }
}

impl From<toml::de::Error> for HeatlogError {
    fn from(err: toml::de::Error) -> Self {
        HeatlogError::Config(err.to_string())
    }
}
