use codeweave_lib::{Session, Value};

use super::ast::{matches, outline};
use super::set::parse_value;

fn session(source: &str) -> Session {
    Session::from_source("a.ts", source).unwrap()
}

#[test]
fn outline_of_named_nodes() {
    insta::assert_snapshot!(outline(&session("const x = { a: 1 };"), false), @r#"
    program 0..19
      lexical_declaration 0..19
        variable_declarator 6..17
          identifier 6..7 "x"
          object 10..17
            pair 12..16
              property_identifier 12..13 "a"
              number 15..16 "1"
    "#);
}

#[test]
fn raw_outline_includes_anonymous_nodes() {
    let source = session("let s = 'a\\tb';");

    let out = outline(&source, true);
    assert!(out.contains("\n    let 0..3 \"let\"\n"));
    assert!(out.contains("; 14..15 \";\""));
    assert!(out.contains("escape_sequence 10..12 \"\\\\t\""));

    assert!(!outline(&source, false).contains("let 0..3"));
}

#[test]
fn kinds_are_listed_in_document_order() {
    let source = session("export const a = { b: 1, c: { d: 2 } };");
    insta::assert_snapshot!(matches(&source, &["pair"]), @r#"
    pair 19..23 "b: 1"
    pair 25..36 "c: { d: 2 }"
    pair 30..34 "d: 2"
    "#);
}

#[test]
fn multi_line_nodes_are_cut() {
    let source = session("const o = {\n  a: 1,\n};\n");
    insta::assert_snapshot!(matches(&source, &["object", "number"]), @r#"
    object 10..21 "{…"
    number 17..18 "1"
    "#);
    assert_eq!(matches(&source, &["class_declaration"]), "");
}

#[test]
fn json_values_become_literals() {
    assert_eq!(parse_value("8080").unwrap(), Value::Number(8080.0));
    assert_eq!(parse_value("\"demo\"").unwrap(), Value::String("demo".into()));
    assert_eq!(
        parse_value("[true, null]").unwrap(),
        Value::Array(vec![Value::Bool(true), Value::Null])
    );
    insta::assert_snapshot!(parse_value("demo").unwrap_err(), @"invalid JSON value `demo`: expected value at line 1 column 1");
}
