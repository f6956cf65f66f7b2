//! silt - content-addressed object store
//!
//! a minimal object store modeled on git's loose-object layer: arbitrary
//! bytes are persisted under the SHA-1 of their framed representation, and
//! directory snapshots are encoded as tree objects referencing other
//! objects by hash.
//!
//! # Core concepts
//!
//! - **Blob**: raw file content, zlib-compressed on disk
//! - **Tree**: a sequence of `"<mode> <name>\0<20 id bytes>"` records
//! - **Object id**: SHA-1 over `"<kind> <payload-length>\0<payload>"`,
//!   stored under `objects/<2 hex>/<38 hex>`
//!
//! # Example usage
//!
//! ```no_run
//! use silt::{ops, Repo};
//! use std::path::Path;
//!
//! // initialize a repository
//! let repo = Repo::init(Path::new("/path/to/project")).unwrap();
//!
//! // snapshot a directory into a tree object
//! let tree_id = ops::snapshot(&repo, repo.path(), Default::default()).unwrap();
//!
//! // list the tree's entries
//! for entry in ops::ls_tree(&repo, &tree_id).unwrap() {
//!     println!("{}", entry);
//! }
//! ```

mod config;
mod error;
mod id;
mod repo;

pub mod object;
pub mod ops;

pub use config::Config;
pub use error::{Error, IoResultExt, Result};
pub use id::ObjectId;
pub use object::{
    decode, encode, object_exists, object_path, read_object, read_tree, write_object, write_tree,
    ObjectKind, TreeEntry,
};
pub use repo::{Repo, METADATA_DIR};
