//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use pakgen_core::application::ports::Filesystem;
use pakgen_core::error::PakgenResult;

/// In-memory filesystem for tests.
///
/// Clones share the same backing store, so a test can hand one clone to the
/// service and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Pre-populate a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent).unwrap();
        }
        self.write_file(path, content).unwrap();
    }

    /// List all files, unordered.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> PakgenResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PakgenResult<()> {
        let mut inner = self.inner.write().expect("memory filesystem poisoned");

        // Mirror the real filesystem: writing into a missing directory fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(pakgen_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.seed_file("a/b.txt", "content");
        assert_eq!(view.read_file("a/b.txt").as_deref(), Some("content"));
    }

    #[test]
    fn write_requires_parent_dir() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("missing/file.txt"), "x").is_err());
        fs.create_dir_all(Path::new("missing")).unwrap();
        assert!(fs.write_file(Path::new("missing/file.txt"), "x").is_ok());
    }
}
