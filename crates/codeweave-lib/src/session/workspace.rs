//! Session cache keyed by normalized path.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{FileStore, FsStore, Session, SessionError, normalize_path};

/// Owns the file store and every session opened through it.
///
/// A file is parsed once and shared until it is saved, invalidated or
/// reloaded; imported modules opened by the resolver land in the same cache.
pub struct Workspace {
    store: Box<dyn FileStore>,
    sessions: RefCell<HashMap<PathBuf, Rc<Session>>>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Box::new(FsStore))
    }
}

impl Workspace {
    pub fn new(store: Box<dyn FileStore>) -> Self {
        Self {
            store,
            sessions: RefCell::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &dyn FileStore {
        self.store.as_ref()
    }

    /// Cached session for `path`, parsing it on first use.
    pub fn session(&self, path: impl AsRef<Path>) -> Result<Rc<Session>, SessionError> {
        let key = normalize_path(path.as_ref());
        if let Some(session) = self.sessions.borrow().get(&key) {
            return Ok(Rc::clone(session));
        }
        self.load(key)
    }

    /// Whether `path` currently has a cached session.
    pub fn is_open(&self, path: impl AsRef<Path>) -> bool {
        self.sessions
            .borrow()
            .contains_key(&normalize_path(path.as_ref()))
    }

    /// Drop the cached session; pending edits are discarded.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let key = normalize_path(path.as_ref());
        let removed = self.sessions.borrow_mut().remove(&key).is_some();
        if removed {
            tracing::debug!(path = %key.display(), "session invalidated");
        }
        removed
    }

    /// Re-read `path` from the store, discarding pending edits.
    pub fn reload(&self, path: impl AsRef<Path>) -> Result<Rc<Session>, SessionError> {
        let key = normalize_path(path.as_ref());
        self.sessions.borrow_mut().remove(&key);
        self.load(key)
    }

    /// Commit the pending edits of `path`, if it is open and has any.
    ///
    /// The saved session leaves the cache; the next access re-reads the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<bool, SessionError> {
        let key = normalize_path(path.as_ref());
        let Some(session) = self.sessions.borrow().get(&key).cloned() else {
            return Ok(false);
        };
        if !session.has_edits() {
            return Ok(false);
        }
        session.save(self.store())?;
        self.sessions.borrow_mut().remove(&key);
        Ok(true)
    }

    /// Commit every open session with pending edits, in path order.
    pub fn save_all(&self) -> Result<Vec<PathBuf>, SessionError> {
        let mut paths: Vec<PathBuf> = self.sessions.borrow().keys().cloned().collect();
        paths.sort();

        let mut saved = Vec::new();
        for path in paths {
            if self.save(&path)? {
                saved.push(path);
            }
        }
        Ok(saved)
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.store.exists(&normalize_path(path.as_ref()))
    }

    /// Write a whole file, bypassing sessions. Any cached session is dropped.
    pub fn write(&self, path: impl AsRef<Path>, content: &str) -> Result<(), SessionError> {
        let key = normalize_path(path.as_ref());
        self.store.write(&key, content)?;
        self.sessions.borrow_mut().remove(&key);
        Ok(())
    }

    fn load(&self, key: PathBuf) -> Result<Rc<Session>, SessionError> {
        let session = Rc::new(Session::open(&key, self.store())?);
        self.sessions
            .borrow_mut()
            .insert(key, Rc::clone(&session));
        Ok(session)
    }
}
