//! Per-file parser sessions.
//!
//! A [`Session`] owns one file's original text, its syntax tree and the
//! pending edits against it. The text and tree never change; edits are only
//! spliced in by [`Session::apply`] / [`Session::save`].

mod lookup;
mod store;
mod workspace;


use std::cell::{Cell, Ref, RefCell};
use std::ops::Range;
use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Node, Tree};

use crate::Lang;
use crate::edit::{Anchor, EditError, Replacement, ReplacementBuffer};
use crate::query::{self, NodeFilter, QueryOptions};

pub use store::{FileStore, FsStore, MemoryStore, normalize_path};
pub use workspace::Workspace;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}:{column}: syntax error", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("{}: no {lang} parser available", .path.display())]
    Parser { path: PathBuf, lang: &'static str },

    #[error("{} has already been saved", .0.display())]
    AlreadySaved(PathBuf),

    #[error("{}: {source}", .path.display())]
    Edit {
        path: PathBuf,
        #[source]
        source: EditError,
    },
}

/// Location of a node that outlives a borrow of its tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub range: Range<usize>,
    pub kind: &'static str,
}

impl NodeRef {
    pub fn of(node: Node<'_>) -> Self {
        Self {
            range: node.start_byte()..node.end_byte(),
            kind: node.kind(),
        }
    }
}

/// `kind start..end`
impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}..{}", self.kind, self.range.start, self.range.end)
    }
}

impl Anchor for NodeRef {
    fn byte_range(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// One parsed source file plus its pending edits.
pub struct Session {
    path: PathBuf,
    lang: Lang,
    content: String,
    tree: Tree,
    edits: RefCell<ReplacementBuffer>,
    saved: Cell<bool>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.path)
            .field("lang", &self.lang)
            .field("edits", &self.edits.borrow().len())
            .field("saved", &self.saved.get())
            .finish()
    }
}

impl Session {
    /// Read and parse `path` from `store`.
    pub fn open(path: impl AsRef<Path>, store: &dyn FileStore) -> Result<Self, SessionError> {
        let path = normalize_path(path.as_ref());
        let content = store.read(&path)?;
        Self::from_source(path, content)
    }

    /// Parse `source` as the content of `path` without touching any store.
    pub fn from_source(
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let path = path.into();
        let content = source.into();
        let lang = Lang::from_path(&path);
        let tree = lang.parse(&content).ok_or_else(|| SessionError::Parser {
            path: path.clone(),
            lang: lang.name(),
        })?;

        if let Some(error) = first_error(tree.root_node()) {
            let point = error.start_position();
            return Err(SessionError::Syntax {
                path,
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        tracing::debug!(path = %path.display(), lang = lang.name(), "parsed");
        Ok(Self {
            path,
            lang,
            content,
            tree,
            edits: RefCell::new(ReplacementBuffer::new()),
            saved: Cell::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Original text, without pending edits.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Top-level statements of the file.
    pub fn statements(&self) -> Vec<Node<'_>> {
        query::named_children(self.root())
    }

    pub fn text(&self, anchor: impl Anchor) -> &str {
        self.content.get(anchor.byte_range()).unwrap_or("")
    }

    /// Re-locate a node inside this session's tree.
    pub fn node(&self, node_ref: &NodeRef) -> Option<Node<'_>> {
        let Range { start, end } = node_ref.range;
        let mut node = self.root().descendant_for_byte_range(start, end)?;
        loop {
            if node.start_byte() != start || node.end_byte() != end {
                return None;
            }
            if node.kind() == node_ref.kind {
                return Some(node);
            }
            node = node.parent()?;
        }
    }

    pub fn find<'s>(
        &'s self,
        filter: &NodeFilter<'_>,
        parent: Option<Node<'s>>,
        options: QueryOptions,
    ) -> Option<Node<'s>> {
        query::find(self.scope(parent), filter, options)
    }

    pub fn filter<'s>(
        &'s self,
        filter: &NodeFilter<'_>,
        parent: Option<Node<'s>>,
        options: QueryOptions,
    ) -> Vec<Node<'s>> {
        query::filter(self.scope(parent), filter, options)
    }

    /// Children of `parent`, or the top-level statements.
    fn scope<'s>(&'s self, parent: Option<Node<'s>>) -> Vec<Node<'s>> {
        match parent {
            Some(parent) => query::named_children(parent),
            None => self.statements(),
        }
    }

    // Pending edits.

    pub fn edits(&self) -> Ref<'_, ReplacementBuffer> {
        self.edits.borrow()
    }

    pub fn has_edits(&self) -> bool {
        !self.edits.borrow().is_empty()
    }

    pub fn push(&self, replacement: Replacement) {
        self.edits.borrow_mut().push(replacement);
    }

    pub fn insert(&self, pos: usize, text: impl Into<String>, priority: i32) {
        self.edits.borrow_mut().insert(pos, text, priority);
    }

    pub fn insert_before(&self, anchor: impl Anchor, text: impl Into<String>) {
        self.edits.borrow_mut().insert_before(anchor, text);
    }

    pub fn insert_after(&self, anchor: impl Anchor, text: impl Into<String>) {
        self.edits.borrow_mut().insert_after(anchor, text);
    }

    pub fn replace(&self, start: usize, end: usize, text: impl Into<String>) {
        self.edits.borrow_mut().replace(start, end, text);
    }

    pub fn replace_node(&self, anchor: impl Anchor, text: impl Into<String>) {
        self.edits.borrow_mut().replace_node(anchor, text);
    }

    pub fn delete(&self, start: usize, end: usize) {
        self.edits.borrow_mut().delete(start, end);
    }

    pub fn delete_node(&self, anchor: impl Anchor) {
        self.edits.borrow_mut().delete_node(anchor);
    }

    /// Original content with every pending edit applied.
    pub fn apply(&self) -> Result<String, SessionError> {
        self.edits
            .borrow()
            .apply(&self.content)
            .map_err(|source| SessionError::Edit {
                path: self.path.clone(),
                source,
            })
    }

    pub fn is_saved(&self) -> bool {
        self.saved.get()
    }

    /// Write the edited content back. A session can be saved only once.
    pub fn save(&self, store: &dyn FileStore) -> Result<(), SessionError> {
        if self.saved.get() {
            return Err(SessionError::AlreadySaved(self.path.clone()));
        }
        let output = self.apply()?;
        store.write(&self.path, &output)?;
        self.saved.set(true);
        tracing::debug!(
            path = %self.path.display(),
            edits = self.edits.borrow().len(),
            "saved"
        );
        Ok(())
    }
}

/// First error or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(first_error)
        .or(Some(node))
}
