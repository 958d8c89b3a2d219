//! Structural search over syntax trees.
//!
//! Nodes are visited in document order (pre-order, parent before children)
//! over named children only. Matching nodes are still descended into when
//! the search is recursive.

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

#[cfg(test)]
mod query_tests;

/// What a node must satisfy to be selected.
pub enum NodeFilter<'a> {
    /// Any of these kinds.
    Kinds(Vec<&'a str>),
    Predicate(Box<dyn for<'t> Fn(Node<'t>) -> bool + 'a>),
}

impl<'a> NodeFilter<'a> {
    pub fn kind(kind: &'a str) -> Self {
        NodeFilter::Kinds(vec![kind])
    }

    pub fn kinds(kinds: impl IntoIterator<Item = &'a str>) -> Self {
        NodeFilter::Kinds(kinds.into_iter().collect())
    }

    pub fn predicate(f: impl for<'t> Fn(Node<'t>) -> bool + 'a) -> Self {
        NodeFilter::Predicate(Box::new(f))
    }

    pub fn matches(&self, node: Node<'_>) -> bool {
        match self {
            NodeFilter::Kinds(kinds) => kinds.contains(&node.kind()),
            NodeFilter::Predicate(f) => f(node),
        }
    }
}

impl std::fmt::Debug for NodeFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeFilter::Kinds(kinds) => f.debug_tuple("Kinds").field(kinds).finish(),
            NodeFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Descend into children of the given nodes.
    pub recursive: bool,
    /// Stop after the first match.
    pub first_only: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            first_only: false,
        }
    }
}

impl QueryOptions {
    pub fn shallow() -> Self {
        Self {
            recursive: false,
            ..Self::default()
        }
    }

    pub fn recursive(mut self, value: bool) -> Self {
        self.recursive = value;
        self
    }

    pub fn first_only(mut self, value: bool) -> Self {
        self.first_only = value;
        self
    }
}

/// Collect nodes matching `filter`, starting with `nodes` themselves.
pub fn filter<'t>(
    nodes: impl IntoIterator<Item = Node<'t>>,
    filter: &NodeFilter<'_>,
    options: QueryOptions,
) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    for node in nodes {
        if visit(node, filter, options, &mut found) {
            break;
        }
    }
    found
}

/// First node matching `filter` in document order.
pub fn find<'t>(
    nodes: impl IntoIterator<Item = Node<'t>>,
    node_filter: &NodeFilter<'_>,
    options: QueryOptions,
) -> Option<Node<'t>> {
    filter(nodes, node_filter, options.first_only(true))
        .into_iter()
        .next()
}

/// Returns `true` when the search should stop.
fn visit<'t>(
    node: Node<'t>,
    filter: &NodeFilter<'_>,
    options: QueryOptions,
    found: &mut Vec<Node<'t>>,
) -> bool {
    if filter.matches(node) {
        found.push(node);
        if options.first_only {
            return true;
        }
    }
    if !options.recursive {
        return false;
    }
    named_children(node)
        .into_iter()
        .any(|child| visit(child, filter, options, found))
}

/// Named children of `node`, in order.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}
