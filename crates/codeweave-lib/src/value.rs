//! Values of configuration literals.
//!
//! Object, array and scalar literals evaluate to structured values; any other
//! expression is kept as [`Value::Code`] with its source text.

use arborium_tree_sitter as tree_sitter;
use indexmap::IndexMap;
use tree_sitter::Node;

use codeweave_core::utils::{is_identifier, quote_single};

use crate::kinds;
use crate::query::named_children;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    Regex { pattern: String, flags: String },
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    /// Un-evaluated expression (functions, calls, identifiers, templates
    /// with substitutions, …).
    Code { kind: String, text: String },
}

impl Value {
    /// Evaluate a literal node. Non-literals become [`Value::Code`].
    pub fn from_node(node: Node<'_>, source: &str) -> Value {
        let node = unwrap_transparent(node);
        match node.kind() {
            kinds::STRING => match string_literal(node, source) {
                Some(s) => Value::String(s),
                None => code(node, source),
            },
            kinds::TEMPLATE_STRING => {
                let has_substitution = named_children(node)
                    .iter()
                    .any(|n| n.kind() == kinds::TEMPLATE_SUBSTITUTION);
                let text = node_text(node, source);
                match text.get(1..text.len().saturating_sub(1)) {
                    Some(inner) if !has_substitution && text.len() >= 2 => {
                        Value::String(unescape(inner))
                    }
                    _ => code(node, source),
                }
            }
            kinds::NUMBER => match parse_number(node_text(node, source)) {
                Some(n) => Value::Number(n),
                None => code(node, source),
            },
            kinds::UNARY_EXPRESSION => signed_number(node, source).unwrap_or_else(|| code(node, source)),
            kinds::TRUE => Value::Bool(true),
            kinds::FALSE => Value::Bool(false),
            kinds::NULL => Value::Null,
            kinds::UNDEFINED => Value::Undefined,
            kinds::REGEX => Value::Regex {
                pattern: node
                    .child_by_field_name("pattern")
                    .map(|p| node_text(p, source).to_string())
                    .unwrap_or_default(),
                flags: node
                    .child_by_field_name("flags")
                    .map(|f| node_text(f, source).to_string())
                    .unwrap_or_default(),
            },
            kinds::ARRAY => Value::Array(
                named_children(node)
                    .into_iter()
                    .filter(|n| n.kind() != kinds::COMMENT)
                    .map(|n| Value::from_node(n, source))
                    .collect(),
            ),
            kinds::OBJECT => {
                let mut map = IndexMap::new();
                for property in named_children(node) {
                    let Some(key) = property_key(property, source) else {
                        continue;
                    };
                    let value = match property.kind() {
                        kinds::PAIR => match property.child_by_field_name("value") {
                            Some(v) => Value::from_node(v, source),
                            None => continue,
                        },
                        _ => code(property, source),
                    };
                    map.insert(key, value);
                }
                Value::Object(map)
            }
            _ => code(node, source),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Value::Code { .. })
    }

    /// TypeScript source for this value: single-quoted strings, integral
    /// numbers without a fraction, inline objects and arrays.
    pub fn to_source(&self) -> String {
        match self {
            Value::String(s) => quote_single(s),
            Value::Number(n) => format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
            Value::Regex { pattern, flags } => format!("/{}/{}", pattern, flags),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(Value::to_source).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Object(map) if map.is_empty() => "{}".to_string(),
            Value::Object(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(k, v)| {
                        let key = if is_identifier(k) {
                            k.clone()
                        } else {
                            quote_single(k)
                        };
                        format!("{}: {}", key, v.to_source())
                    })
                    .collect();
                format!("{{ {} }}", entries.join(", "))
            }
            Value::Code { text, .. } => text.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::String(s) => Json::String(s.clone()),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.0e15 {
                    Json::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(Json::Number)
                        .unwrap_or(Json::Null)
                }
            }
            Value::Bool(b) => Json::Bool(*b),
            Value::Null | Value::Undefined => Json::Null,
            Value::Regex { .. } | Value::Code { .. } => Json::String(self.to_source()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Key of a pair, shorthand property or method, with string quotes removed.
pub fn property_key(property: Node<'_>, source: &str) -> Option<String> {
    let key = match property.kind() {
        kinds::SHORTHAND_PROPERTY => return Some(node_text(property, source).to_string()),
        kinds::PAIR => property.child_by_field_name("key")?,
        kinds::METHOD_DEFINITION => property.child_by_field_name("name")?,
        _ => return None,
    };
    match key.kind() {
        kinds::STRING => string_literal(key, source),
        kinds::NUMBER => parse_number(node_text(key, source)).map(format_number),
        _ => Some(node_text(key, source).to_string()),
    }
}

/// Content of a quoted string literal, escapes resolved.
pub fn string_literal(node: Node<'_>, source: &str) -> Option<String> {
    let text = node_text(node, source);
    if text.len() < 2 {
        return None;
    }
    text.get(1..text.len() - 1).map(unescape)
}

/// Parse a JavaScript numeric literal (`1_000`, `0x1f`, `1e3`, `10n`).
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let cleaned = cleaned.strip_suffix('n').unwrap_or(&cleaned);
    let lower = cleaned.to_ascii_lowercase();
    let radix = |prefix: &str, radix: u32| {
        lower
            .strip_prefix(prefix)
            .and_then(|digits| u64::from_str_radix(digits, radix).ok())
            .map(|n| n as f64)
    };
    if lower.starts_with("0x") {
        return radix("0x", 16);
    }
    if lower.starts_with("0o") {
        return radix("0o", 8);
    }
    if lower.starts_with("0b") {
        return radix("0b", 2);
    }
    lower.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render a number the way JavaScript prints it for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Strip `(…)`, `as T`, `satisfies T` and `!` around an expression.
pub fn unwrap_transparent(mut node: Node<'_>) -> Node<'_> {
    while kinds::TRANSPARENT_WRAPPERS.contains(&node.kind()) {
        match named_children(node)
            .into_iter()
            .find(|n| n.kind() != kinds::COMMENT)
        {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

fn signed_number(node: Node<'_>, source: &str) -> Option<Value> {
    let operator = node.child_by_field_name("operator")?;
    let argument = unwrap_transparent(node.child_by_field_name("argument")?);
    if argument.kind() != kinds::NUMBER {
        return None;
    }
    let n = parse_number(node_text(argument, source))?;
    match node_text(operator, source) {
        "-" => Some(Value::Number(-n)),
        "+" => Some(Value::Number(n)),
        _ => None,
    }
}

fn code(node: Node<'_>, source: &str) -> Value {
    Value::Code {
        kind: node.kind().to_string(),
        text: node_text(node, source).to_string(),
    }
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            // Line continuation.
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\x");
                        out.push_str(&hex);
                    }
                }
            }
            'u' => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    chars.by_ref().take_while(|c| *c != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}
