use indexmap::IndexMap;
use indoc::indoc;

use crate::Session;
use crate::value::{Value, format_number, parse_number};

/// Evaluate the initializer of `const v = …`.
fn eval(expr: &str) -> Value {
    let source = format!("const v = {};\n", expr);
    let session = Session::from_source("v.ts", source.as_str()).unwrap();
    let declarator = session.top_level_declarator("v").unwrap();
    let value = declarator.child_by_field_name("value").unwrap();
    Value::from_node(value, session.content())
}

#[test]
fn scalars() {
    assert_eq!(eval("'dev'"), Value::String("dev".into()));
    assert_eq!(eval(r#""it\'s\n""#), Value::String("it's\n".into()));
    assert_eq!(eval("42"), Value::Number(42.0));
    assert_eq!(eval("-1.5"), Value::Number(-1.5));
    assert_eq!(eval("0x1F"), Value::Number(31.0));
    assert_eq!(eval("1_000"), Value::Number(1000.0));
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("null"), Value::Null);
    assert_eq!(eval("undefined"), Value::Undefined);
}

#[test]
fn regex_literal() {
    assert_eq!(
        eval(r"/^\d+$/gi"),
        Value::Regex {
            pattern: r"^\d+$".into(),
            flags: "gi".into()
        }
    );
}

#[test]
fn templates() {
    assert_eq!(eval("`plain`"), Value::String("plain".into()));
    assert!(eval("`a${b}`").is_code());
}

#[test]
fn nested_literals_keep_order() {
    let value = eval(indoc! {r#"
        {
          name: 'usuarios',
          'rel-name': ['a', "b"],
          3: null,
          // comment
          nested: { deep: [1, { x: true }] },
        }
    "#});

    let mut expected = IndexMap::new();
    expected.insert("name".to_string(), Value::from("usuarios"));
    expected.insert(
        "rel-name".to_string(),
        Value::Array(vec![Value::from("a"), Value::from("b")]),
    );
    expected.insert("3".to_string(), Value::Null);
    let mut x = IndexMap::new();
    x.insert("x".to_string(), Value::Bool(true));
    let mut deep = IndexMap::new();
    deep.insert(
        "deep".to_string(),
        Value::Array(vec![Value::Number(1.0), Value::Object(x)]),
    );
    expected.insert("nested".to_string(), Value::Object(deep));

    assert_eq!(value, Value::Object(expected));
}

#[test]
fn non_literals_are_code() {
    let value = eval("(schema) => schema");
    assert_eq!(
        value,
        Value::Code {
            kind: "arrow_function".into(),
            text: "(schema) => schema".into()
        }
    );

    let obj = eval("{ a, b: other, c() { return 1; } }");
    let map = obj.as_object().unwrap();
    assert!(map.values().all(Value::is_code));
    assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn wrappers_are_transparent() {
    assert_eq!(eval("('x')"), Value::from("x"));
    assert_eq!(
        eval("['a'] as const"),
        Value::Array(vec![Value::from("a")])
    );
    assert_eq!(eval("{ a: 1 } satisfies object").as_object().unwrap().len(), 1);
}

#[test]
fn to_source_renders_typescript() {
    let value = eval("{ env: 'prod', port: 8080, ratio: 0.5, tags: ['a'], 'x-y': null, re: /a/g }");
    insta::assert_snapshot!(
        value.to_source(),
        @"{ env: 'prod', port: 8080, ratio: 0.5, tags: ['a'], 'x-y': null, re: /a/g }"
    );
    assert_eq!(Value::Object(IndexMap::new()).to_source(), "{}");
    assert_eq!(Value::from("it's").to_source(), r"'it\'s'");
}

#[test]
fn json_conversion() {
    let json = serde_json::json!({ "port": 8080, "ratio": 0.5, "tags": ["a"], "off": null });
    let value = Value::from(json.clone());
    assert_eq!(value.to_json(), json);
    assert_eq!(value.as_object().unwrap()["port"], Value::Number(8080.0));

    let list = Value::from(serde_json::json!(["a", 1, null, false]));
    assert_eq!(list.to_source(), "['a', 1, null, false]");
}

#[test]
fn numbers() {
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number("0b101"), Some(5.0));
    assert_eq!(parse_number("0o17"), Some(15.0));
    assert_eq!(parse_number("10n"), Some(10.0));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("abc"), None);

    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(2.25), "2.25");
}
