//! Output file location

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Destination of the synthesized audio file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputPath(PathBuf);

impl OutputPath {
    /// Create an output path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Underlying path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Parent directory, or `None` for a bare file name
    pub fn parent_dir(&self) -> Option<&Path> {
        self.0.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Create the parent directory tree if it is missing
    ///
    /// Returns the directory that was ensured, if any. Succeeds when the
    /// directory already exists.
    pub fn ensure_parent_dir(&self) -> io::Result<Option<&Path>> {
        let Some(dir) = self.parent_dir() else {
            return Ok(None);
        };
        std::fs::create_dir_all(dir)?;
        Ok(Some(dir))
    }
}

impl fmt::Display for OutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_name_has_no_parent() {
        let path = OutputPath::new("out.wav");
        assert!(path.parent_dir().is_none());
        assert!(path.ensure_parent_dir().unwrap().is_none());
    }

    #[test]
    fn test_ensure_parent_dir_creates_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/c/out.wav");
        let path = OutputPath::new(&target);

        let dir = path.ensure_parent_dir().unwrap();
        assert_eq!(dir, Some(tmp.path().join("a/b/c").as_path()));
        assert!(tmp.path().join("a/b/c").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_parent_dir_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = OutputPath::new(tmp.path().join("nested/out.wav"));

        assert!(path.ensure_parent_dir().is_ok());
        assert!(path.ensure_parent_dir().is_ok());
        assert!(tmp.path().join("nested").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_fails_when_parent_is_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let path = OutputPath::new(blocker.join("out.wav"));
        assert!(path.ensure_parent_dir().is_err());
    }

    #[test]
    fn test_display() {
        let path = OutputPath::new("/tmp/out.wav");
        assert_eq!(path.to_string(), "/tmp/out.wav");
    }
}
