use std::fmt;

use crate::error::Result;
use crate::id::ObjectId;
use crate::object::{read_object, read_tree};
use crate::repo::Repo;

/// a listed tree entry with its resolved object kind
#[derive(Debug, Clone)]
pub struct LsTreeEntry {
    pub mode: String,
    pub kind: String,
    pub id: ObjectId,
    pub name: String,
}

/// list the entries of a tree object
///
/// each entry's kind is resolved by reading the referenced object. a
/// resolution failure (for example a missing object) degrades that entry's
/// kind to "unknown" instead of aborting: the listing stays maximally
/// informative under partial repository corruption.
pub fn ls_tree(repo: &Repo, id: &ObjectId) -> Result<Vec<LsTreeEntry>> {
    let entries = read_tree(repo, id)?;

    let mut listed = Vec::with_capacity(entries.len());
    for entry in entries {
        let kind = match read_object(repo, &entry.id) {
            Ok((kind, _)) => kind.as_str().to_string(),
            Err(_) => "unknown".to_string(),
        };

        listed.push(LsTreeEntry {
            mode: entry.mode,
            kind,
            id: entry.id,
            name: entry.name,
        });
    }

    Ok(listed)
}

impl fmt::Display for LsTreeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // mode is left-padded to 6 digits for display only
        write!(f, "{:0>6} {} {}\t{}", self.mode, self.kind, self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::object::{write_object, write_tree, ObjectKind, TreeEntry};
    use std::fs;
    use tempfile::tempdir;

    fn test_repo() -> (tempfile::TempDir, Repo) {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("repo");
        let repo = Repo::init(&repo_path).unwrap();
        (dir, repo)
    }

    #[test]
    fn test_ls_tree_resolves_kinds() {
        let (_dir, repo) = test_repo();

        let blob_id = write_object(&repo, ObjectKind::Blob, b"content").unwrap();
        let subtree_id = write_tree(&repo, &[]).unwrap();

        let tree_id = write_tree(
            &repo,
            &[
                TreeEntry::new("644", "file.txt", blob_id),
                TreeEntry::new("40000", "sub", subtree_id),
            ],
        )
        .unwrap();

        let listed = ls_tree(&repo, &tree_id).unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].kind, "blob");
        assert_eq!(listed[0].name, "file.txt");
        assert_eq!(listed[1].kind, "tree");
        assert_eq!(listed[1].name, "sub");
    }

    #[test]
    fn test_ls_tree_degrades_missing_entry_to_unknown() {
        let (_dir, repo) = test_repo();

        let blob_id = write_object(&repo, ObjectKind::Blob, b"present").unwrap();
        let missing = ObjectId::from_hex("00000000000000000000000000000000000000aa").unwrap();

        let tree_id = write_tree(
            &repo,
            &[
                TreeEntry::new("644", "gone.txt", missing),
                TreeEntry::new("644", "here.txt", blob_id),
            ],
        )
        .unwrap();

        let listed = ls_tree(&repo, &tree_id).unwrap();

        // listing continues past the broken entry
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].kind, "unknown");
        assert_eq!(listed[1].kind, "blob");
    }

    #[test]
    fn test_ls_tree_rejects_blob_id() {
        let (_dir, repo) = test_repo();

        let blob_id = write_object(&repo, ObjectKind::Blob, b"not a tree").unwrap();
        let result = ls_tree(&repo, &blob_id);

        assert!(matches!(result, Err(Error::NotATree(_))));
    }

    #[test]
    fn test_ls_tree_empty_tree() {
        let (_dir, repo) = test_repo();

        let tree_id = write_tree(&repo, &[]).unwrap();
        let listed = ls_tree(&repo, &tree_id).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_ls_tree_entry_display() {
        let (_dir, repo) = test_repo();

        let blob_id = write_object(&repo, ObjectKind::Blob, b"data").unwrap();
        let tree_id = write_tree(&repo, &[TreeEntry::new("644", "file.txt", blob_id)]).unwrap();

        let listed = ls_tree(&repo, &tree_id).unwrap();
        let line = format!("{}", listed[0]);

        // mode padded to 6 digits, then kind, full id, tab, name
        assert!(line.starts_with("000644 blob "));
        assert!(line.contains(&blob_id.to_hex()));
        assert!(line.ends_with("\tfile.txt"));
    }

    #[test]
    fn test_ls_tree_corrupt_entry_object_degrades() {
        let (_dir, repo) = test_repo();

        let blob_id = write_object(&repo, ObjectKind::Blob, b"soon corrupt").unwrap();
        let tree_id = write_tree(&repo, &[TreeEntry::new("644", "bad.txt", blob_id)]).unwrap();

        // overwrite the referenced object with garbage
        let path = crate::object::object_path(&repo, &blob_id);
        fs::write(path, b"garbage").unwrap();

        let listed = ls_tree(&repo, &tree_id).unwrap();
        assert_eq!(listed[0].kind, "unknown");
    }
}
