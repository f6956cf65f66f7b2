//! high-level operations on silt repositories

pub mod hash_object;
pub mod ls_tree;
pub mod snapshot;

pub use hash_object::hash_object;
pub use ls_tree::{ls_tree, LsTreeEntry};
pub use snapshot::{snapshot, SnapshotOptions, TreeStrategy, DIR_MODE};
