use indoc::indoc;

use super::{NodeFilter, QueryOptions, filter, find, named_children};
use crate::Lang;

const SOURCE: &str = indoc! {r#"
    const a = { b: { c: 1 } };
    let d = [1, 2];
    export const e = 'x';
"#};

fn kinds_of(source: &str, node_filter: &NodeFilter<'_>, options: QueryOptions) -> Vec<String> {
    let tree = Lang::TypeScript.parse(source).unwrap();
    let root = tree.root_node();
    filter(named_children(root), node_filter, options)
        .into_iter()
        .map(|n| format!("{}:{}", n.kind(), &source[n.byte_range()]))
        .collect()
}

#[test]
fn filter_by_kind_in_document_order() {
    let found = kinds_of(SOURCE, &NodeFilter::kind("number"), QueryOptions::default());
    assert_eq!(found, ["number:1", "number:1", "number:2"]);
}

#[test]
fn filter_by_any_of_kinds() {
    let found = kinds_of(
        SOURCE,
        &NodeFilter::kinds(["lexical_declaration", "export_statement"]),
        QueryOptions::default(),
    );
    // The declaration inside the export matches too.
    assert_eq!(found.len(), 4);
    assert!(found[2].starts_with("export_statement:"));
    assert_eq!(found[3], "lexical_declaration:const e = 'x';");
}

#[test]
fn non_recursive_only_checks_given_nodes() {
    let found = kinds_of(SOURCE, &NodeFilter::kind("number"), QueryOptions::shallow());
    assert!(found.is_empty());

    let found = kinds_of(
        SOURCE,
        &NodeFilter::kind("lexical_declaration"),
        QueryOptions::shallow(),
    );
    assert_eq!(found.len(), 2);
}

#[test]
fn matched_nodes_are_descended_into() {
    let found = kinds_of(SOURCE, &NodeFilter::kind("object"), QueryOptions::default());
    assert_eq!(found, ["object:{ b: { c: 1 } }", "object:{ c: 1 }"]);
}

#[test]
fn predicate_filter_sees_source() {
    let source = SOURCE;
    let is_e = NodeFilter::predicate(|n| {
        n.kind() == "variable_declarator"
            && n
                .child_by_field_name("name")
                .is_some_and(|name| &source[name.byte_range()] == "e")
    });
    let found = kinds_of(source, &is_e, QueryOptions::default());
    assert_eq!(found, ["variable_declarator:e = 'x'"]);
}

#[test]
fn find_returns_first_match() {
    let tree = Lang::TypeScript.parse(SOURCE).unwrap();
    let root = tree.root_node();

    let first = find([root], &NodeFilter::kind("variable_declarator"), QueryOptions::default());
    assert_eq!(&SOURCE[first.unwrap().byte_range()], "a = { b: { c: 1 } }");

    let none = find([root], &NodeFilter::kind("class_declaration"), QueryOptions::default());
    assert!(none.is_none());
}

#[test]
fn first_only_stops_filter() {
    let found = kinds_of(
        SOURCE,
        &NodeFilter::kind("number"),
        QueryOptions::default().first_only(true),
    );
    assert_eq!(found, ["number:1"]);
}
