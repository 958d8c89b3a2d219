//! File access behind a trait, so sessions can run against disk or memory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::SessionError;

/// Read/write access to source files. The engine never lists directories.
pub trait FileStore {
    fn read(&self, path: &Path) -> Result<String, SessionError>;
    fn write(&self, path: &Path, content: &str) -> Result<(), SessionError>;
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<String, SessionError> {
        std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SessionError::NotFound(path.to_path_buf()),
            _ => SessionError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), SessionError> {
        std::fs::write(path, content).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// In-memory files keyed by normalized path. Used for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(normalize_path(path.as_ref()), content.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(&normalize_path(path.as_ref()))
            .cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String, SessionError> {
        self.get(path)
            .ok_or_else(|| SessionError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), SessionError> {
        self.insert(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(&normalize_path(path))
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment. Leading `..` of relative paths are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}
