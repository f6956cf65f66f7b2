use std::fmt;

use crate::error::{Error, Result};

pub mod store;
pub mod tree;

pub use store::{object_exists, object_path, read_object, write_object};
pub use tree::{decode, encode, read_tree, write_tree, TreeEntries, TreeEntry};

/// kind of stored object
///
/// the kind token is the first field of the on-disk header and part of
/// the hashed byte sequence, so two objects with identical payloads but
/// different kinds have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
}

impl ObjectKind {
    /// the header token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Tree => "tree",
        }
    }

    /// parse a header token
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "blob" => Ok(ObjectKind::Blob),
            "tree" => Ok(ObjectKind::Tree),
            other => Err(Error::InvalidObjectType(other.to_string())),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ObjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s)
    }
}
