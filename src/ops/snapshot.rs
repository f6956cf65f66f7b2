use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Error, IoResultExt, Result};
use crate::id::ObjectId;
use crate::object::{write_object, write_tree, ObjectKind, TreeEntry};
use crate::repo::{Repo, METADATA_DIR};

/// mode recorded for subtree entries in recursive snapshots
pub const DIR_MODE: &str = "40000";

/// tree construction strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeStrategy {
    /// every file becomes one entry keyed by its full relative path,
    /// in a single tree object (reference-compatible behavior)
    #[default]
    Flat,
    /// one tree object per directory, subtrees referenced by hash
    Recursive,
}

/// options for snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotOptions {
    pub strategy: TreeStrategy,
}

/// snapshot a directory into the object store, returning the tree id
///
/// every regular file beneath `source` is written as a blob; the store's
/// own metadata directory is skipped. entries carry permission bits only,
/// rendered as octal digits with no fixed width.
pub fn snapshot(repo: &Repo, source: &Path, options: SnapshotOptions) -> Result<ObjectId> {
    match options.strategy {
        TreeStrategy::Flat => snapshot_flat(repo, source),
        TreeStrategy::Recursive => snapshot_dir(repo, source),
    }
}

/// flat strategy: one tree level, full relative paths as entry names
fn snapshot_flat(repo: &Repo, source: &Path) -> Result<ObjectId> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(source)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != METADATA_DIR);

    for entry in walker {
        let entry = entry.map_err(|e| Error::Io {
            path: source.to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = path
            .strip_prefix(source)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        let meta = entry.metadata().map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let mode = format!("{:o}", meta.permissions().mode() & 0o777);

        let content = fs::read(path).with_path(path)?;
        let id = write_object(repo, ObjectKind::Blob, &content)?;

        entries.push(TreeEntry::new(mode, name, id));
    }

    // deterministic tree id requires byte-lexicographic order by name
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    write_tree(repo, &entries)
}

/// recursive strategy: one tree object per directory
fn snapshot_dir(repo: &Repo, dir: &Path) -> Result<ObjectId> {
    let mut dir_entries: Vec<_> = fs::read_dir(dir)
        .with_path(dir)?
        .collect::<std::io::Result<Vec<_>>>()
        .with_path(dir)?;
    dir_entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut entries = Vec::new();
    for entry in dir_entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == METADATA_DIR {
            continue;
        }

        let meta = fs::symlink_metadata(&path).with_path(&path)?;
        if meta.is_dir() {
            let subtree = snapshot_dir(repo, &path)?;
            entries.push(TreeEntry::new(DIR_MODE, name, subtree));
        } else if meta.is_file() {
            let mode = format!("{:o}", meta.permissions().mode() & 0o777);
            let content = fs::read(&path).with_path(&path)?;
            let id = write_object(repo, ObjectKind::Blob, &content)?;
            entries.push(TreeEntry::new(mode, name, id));
        }
        // symlinks and special files are outside the object model
    }

    write_tree(repo, &entries)
}
