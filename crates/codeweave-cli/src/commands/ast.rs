//! Show the nodes of a TypeScript file with their byte ranges.
//!
//! Without `--kind` the whole tree is printed as an indented outline. With
//! it, only the matching nodes are listed in document order, which is what
//! a property path or an edit anchor is built from.

use std::fmt::Write as _;
use std::path::PathBuf;

use arborium_tree_sitter as tree_sitter;
use codeweave_lib::query;
use codeweave_lib::{FsStore, NodeFilter, NodeRef, QueryOptions, Session};

use super::exit_with;

/// Longest source excerpt shown for a node.
const EXCERPT_LEN: usize = 40;

pub struct AstArgs {
    pub file: PathBuf,
    pub raw: bool,
    pub kinds: Vec<String>,
}

pub fn run(args: AstArgs) {
    let session = Session::open(&args.file, &FsStore).unwrap_or_else(|e| exit_with(e));
    if args.kinds.is_empty() {
        print!("{}", outline(&session, args.raw));
    } else {
        let kinds: Vec<&str> = args.kinds.iter().map(String::as_str).collect();
        print!("{}", matches(&session, &kinds));
    }
}

/// Every node below the root, one per line, indented by depth.
///
/// Leaves carry their source text. `raw` adds anonymous nodes.
pub fn outline(session: &Session, raw: bool) -> String {
    let mut out = String::new();
    write_node(session, session.root(), 0, raw, &mut out);
    out
}

/// Nodes of the given kinds, searched from the top-level statements.
pub fn matches(session: &Session, kinds: &[&str]) -> String {
    let filter = NodeFilter::kinds(kinds.iter().copied());
    let mut out = String::new();
    for node in session.filter(&filter, None, QueryOptions::default()) {
        let node_ref = NodeRef::of(node);
        let _ = writeln!(out, "{} {:?}", node_ref, excerpt(session.text(&node_ref)));
    }
    out
}

fn write_node(
    session: &Session,
    node: tree_sitter::Node<'_>,
    depth: usize,
    raw: bool,
    out: &mut String,
) {
    let children: Vec<tree_sitter::Node<'_>> = if raw {
        let mut cursor = node.walk();
        node.children(&mut cursor).collect()
    } else {
        query::named_children(node)
    };

    let node_ref = NodeRef::of(node);
    let _ = write!(out, "{:indent$}{}", "", node_ref, indent = depth * 2);
    if children.is_empty() {
        let _ = write!(out, " {:?}", excerpt(session.text(&node_ref)));
    }
    out.push('\n');

    for child in children {
        write_node(session, child, depth + 1, raw, out);
    }
}

/// First line of `text`, cut to [`EXCERPT_LEN`] characters.
fn excerpt(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    let mut cut: String = line.chars().take(EXCERPT_LEN).collect();
    if cut.len() < text.len() {
        cut.push('…');
    }
    cut
}
