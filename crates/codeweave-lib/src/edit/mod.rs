//! Text replacements against an immutable source.
//!
//! Edits are recorded as `{start, end, text, priority}` byte ranges and only
//! spliced into the text on [`ReplacementBuffer::apply`]. Applying in
//! descending `start` order keeps every pending offset valid, since each
//! splice only touches text to the right of the edits still to come.

use std::ops::Range;

use arborium_tree_sitter as tree_sitter;

#[cfg(test)]
mod buffer_tests;

/// Errors raised when a set of replacements cannot be applied cleanly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("replacement {start}..{end} overlaps an edit starting at {next}")]
    Overlap {
        start: usize,
        end: usize,
        next: usize,
    },

    #[error("replacement {start}..{end} is out of bounds (content length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("replacement offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// A pending splice of `text` over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub priority: i32,
}

impl Replacement {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_insert(&self) -> bool {
        self.start == self.end
    }
}

/// Anything that covers a byte range of the source.
pub trait Anchor {
    fn byte_range(&self) -> Range<usize>;
}

impl Anchor for tree_sitter::Node<'_> {
    fn byte_range(&self) -> Range<usize> {
        self.start_byte()..self.end_byte()
    }
}

impl Anchor for Range<usize> {
    fn byte_range(&self) -> Range<usize> {
        self.clone()
    }
}

impl<A: Anchor + ?Sized> Anchor for &A {
    fn byte_range(&self) -> Range<usize> {
        (**self).byte_range()
    }
}

/// Ordered collection of pending edits.
///
/// All mutating methods are appends; nothing is validated until `apply`.
#[derive(Debug, Clone, Default)]
pub struct ReplacementBuffer {
    replacements: Vec<Replacement>,
}

impl ReplacementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, replacement: Replacement) {
        self.replacements.push(replacement);
    }

    pub fn insert(&mut self, pos: usize, text: impl Into<String>, priority: i32) {
        self.push(Replacement::new(pos, pos, text).with_priority(priority));
    }

    pub fn insert_before(&mut self, anchor: impl Anchor, text: impl Into<String>) {
        self.insert(anchor.byte_range().start, text, 0);
    }

    pub fn insert_after(&mut self, anchor: impl Anchor, text: impl Into<String>) {
        self.insert(anchor.byte_range().end, text, 0);
    }

    pub fn replace(&mut self, start: usize, end: usize, text: impl Into<String>) {
        self.push(Replacement::new(start, end, text));
    }

    pub fn replace_node(&mut self, anchor: impl Anchor, text: impl Into<String>) {
        let range = anchor.byte_range();
        self.replace(range.start, range.end, text);
    }

    pub fn delete(&mut self, start: usize, end: usize) {
        self.replace(start, end, "");
    }

    pub fn delete_node(&mut self, anchor: impl Anchor) {
        let range = anchor.byte_range();
        self.delete(range.start, range.end);
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replacement> {
        self.replacements.iter()
    }

    pub fn clear(&mut self) {
        self.replacements.clear();
    }

    /// Replacements in application order: descending `start`, then
    /// descending `end` (wider edits first), then ascending `priority`.
    pub fn sorted(&self) -> Vec<Replacement> {
        let mut sorted = self.replacements.clone();
        sorted.sort_by(|a, b| {
            b.start
                .cmp(&a.start)
                .then(b.end.cmp(&a.end))
                .then(a.priority.cmp(&b.priority))
        });
        sorted
    }

    /// Splice every replacement into `content`.
    ///
    /// Fails without producing text when two edits overlap, a range falls
    /// outside `content`, or an offset splits a UTF-8 sequence. Inserts at
    /// the boundary of another edit are not overlaps.
    pub fn apply(&self, content: &str) -> Result<String, EditError> {
        let sorted = self.sorted();
        validate(&sorted, content)?;

        let mut out = content.to_string();
        for r in &sorted {
            out.replace_range(r.start..r.end, &r.text);
        }
        Ok(out)
    }
}

fn validate(sorted: &[Replacement], content: &str) -> Result<(), EditError> {
    let len = content.len();
    let mut limit = len;

    for r in sorted {
        if r.start > r.end || r.end > len {
            return Err(EditError::OutOfBounds {
                start: r.start,
                end: r.end,
                len,
            });
        }
        for offset in [r.start, r.end] {
            if !content.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        if r.end > limit {
            return Err(EditError::Overlap {
                start: r.start,
                end: r.end,
                next: limit,
            });
        }
        limit = r.start;
    }
    Ok(())
}
