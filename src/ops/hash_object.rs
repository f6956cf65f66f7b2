use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, Result};
use crate::id::ObjectId;
use crate::object::{write_object, ObjectKind};
use crate::repo::Repo;

/// store a file's content as a blob object and return its id
pub fn hash_object(repo: &Repo, file: &Path) -> Result<ObjectId> {
    let content = fs::read(file).with_path(file)?;
    write_object(repo, ObjectKind::Blob, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::read_object;
    use tempfile::tempdir;

    #[test]
    fn test_hash_object_stores_blob() {
        let dir = tempdir().unwrap();
        let repo = Repo::init(&dir.path().join("repo")).unwrap();

        let file = dir.path().join("input.txt");
        fs::write(&file, "file content").unwrap();

        let id = hash_object(&repo, &file).unwrap();

        let (kind, payload) = read_object(&repo, &id).unwrap();
        assert_eq!(kind, ObjectKind::Blob);
        assert_eq!(payload, b"file content");
    }

    #[test]
    fn test_hash_object_missing_file() {
        let dir = tempdir().unwrap();
        let repo = Repo::init(&dir.path().join("repo")).unwrap();

        let result = hash_object(&repo, &dir.path().join("missing.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_object_same_content_same_id() {
        let dir = tempdir().unwrap();
        let repo = Repo::init(&dir.path().join("repo")).unwrap();

        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "same").unwrap();
        fs::write(&b, "same").unwrap();

        assert_eq!(
            hash_object(&repo, &a).unwrap(),
            hash_object(&repo, &b).unwrap()
        );
    }
}
