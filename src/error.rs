use std::path::PathBuf;

use crate::ObjectId;

/// error type for silt operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("repository not found at {0}")]
    NoRepo(PathBuf),

    #[error("repository already exists at {0}")]
    RepoExists(PathBuf),

    #[error("invalid object id: {0}")]
    InvalidId(String),

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("corrupt object {0}: bad compressed stream")]
    CorruptStream(ObjectId),

    #[error("corrupt object {0}: malformed header")]
    MalformedHeader(ObjectId),

    #[error("corrupt object {id}: header declares {declared} bytes, payload has {actual}")]
    SizeMismatch {
        id: ObjectId,
        declared: usize,
        actual: usize,
    },

    #[error("invalid object type: {0}")]
    InvalidObjectType(String),

    #[error("not a tree object: {0}")]
    NotATree(ObjectId),

    #[error("truncated tree entry: {0}")]
    TruncatedEntry(&'static str),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// helper to wrap io errors with path context
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}
