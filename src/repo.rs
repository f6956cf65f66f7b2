use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, IoResultExt, Result};

/// name of the metadata directory inside a repository root
pub const METADATA_DIR: &str = ".git";

/// contents of the HEAD file written at init
const HEAD_CONTENTS: &str = "ref: refs/heads/main\n";

/// a silt repository
///
/// carries the repository root explicitly; no operation depends on the
/// process working directory.
pub struct Repo {
    path: PathBuf,
    config: Config,
}

impl Repo {
    /// initialize a new repository at the given path
    ///
    /// creates `<path>/.git/objects`, `<path>/.git/refs` and a HEAD file
    /// pointing at refs/heads/main.
    pub fn init(path: &Path) -> Result<Self> {
        let meta = path.join(METADATA_DIR);
        let head_path = meta.join("HEAD");
        if head_path.exists() {
            return Err(Error::RepoExists(path.to_path_buf()));
        }

        fs::create_dir_all(meta.join("objects")).with_path(&meta)?;
        fs::create_dir_all(meta.join("refs")).with_path(&meta)?;
        fs::write(&head_path, HEAD_CONTENTS).with_path(&head_path)?;

        let config = Config::default();
        config.save(&meta.join("config.toml"))?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// open an existing repository
    ///
    /// a missing config.toml is tolerated and falls back to defaults, so
    /// repositories created by other tooling remain readable.
    pub fn open(path: &Path) -> Result<Self> {
        let meta = path.join(METADATA_DIR);
        if !meta.join("HEAD").exists() {
            return Err(Error::NoRepo(path.to_path_buf()));
        }

        let config_path = meta.join("config.toml");
        let config = if config_path.exists() {
            Config::load(&config_path)?
        } else {
            Config::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// repository root path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// repository configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// path to the metadata directory
    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    /// path to the objects directory
    pub fn objects_path(&self) -> PathBuf {
        self.metadata_path().join("objects")
    }

    /// path to the refs directory
    pub fn refs_path(&self) -> PathBuf {
        self.metadata_path().join("refs")
    }

    /// path to the HEAD file
    pub fn head_path(&self) -> PathBuf {
        self.metadata_path().join("HEAD")
    }

    /// path to config.toml
    pub fn config_path(&self) -> PathBuf {
        self.metadata_path().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_repo_init() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");

        let repo = Repo::init(&repo_path).unwrap();

        assert!(repo_path.join(".git/objects").is_dir());
        assert!(repo_path.join(".git/refs").is_dir());
        assert!(repo_path.join(".git/HEAD").is_file());
        assert!(repo_path.join(".git/config.toml").is_file());
        assert_eq!(repo.path(), repo_path);
    }

    #[test]
    fn test_head_contents() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");
        let repo = Repo::init(&repo_path).unwrap();

        let head = fs::read_to_string(repo.head_path()).unwrap();
        assert_eq!(head, "ref: refs/heads/main\n");
    }

    #[test]
    fn test_repo_init_already_exists() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");

        Repo::init(&repo_path).unwrap();
        let result = Repo::init(&repo_path);

        assert!(matches!(result, Err(Error::RepoExists(_))));
    }

    #[test]
    fn test_repo_open() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");

        Repo::init(&repo_path).unwrap();
        let repo = Repo::open(&repo_path).unwrap();

        assert_eq!(repo.path(), repo_path);
        assert_eq!(repo.config(), &Config::default());
    }

    #[test]
    fn test_repo_open_not_found() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("nonexistent");

        let result = Repo::open(&repo_path);
        assert!(matches!(result, Err(Error::NoRepo(_))));
    }

    #[test]
    fn test_repo_open_without_config() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");

        Repo::init(&repo_path).unwrap();
        fs::remove_file(repo_path.join(".git/config.toml")).unwrap();

        let repo = Repo::open(&repo_path).unwrap();
        assert_eq!(repo.config(), &Config::default());
    }

    #[test]
    fn test_repo_paths() {
        let dir = tempdir().unwrap();
        let repo_path = dir.path().join("test-repo");
        let repo = Repo::init(&repo_path).unwrap();

        assert_eq!(repo.objects_path(), repo_path.join(".git/objects"));
        assert_eq!(repo.refs_path(), repo_path.join(".git/refs"));
        assert_eq!(repo.head_path(), repo_path.join(".git/HEAD"));
    }
}
