//! `EntitySchema` declarations and their `detail` / `list` selections.

use std::fmt;
use std::path::Path;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

use codeweave_core::EntityName;

use super::SchemaError;
use crate::kinds;
use crate::session::{Session, Workspace};
use crate::value::{Value, format_number};

/// Type annotation that marks a schema declaration.
pub const SCHEMA_TYPE: &str = "EntitySchema";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Detail,
    List,
}

impl View {
    pub fn key(self) -> &'static str {
        match self {
            View::Detail => "detail",
            View::List => "list",
        }
    }

    /// Singular name for details, plural for lists.
    pub fn pick(self, name: &EntityName) -> &str {
        match self {
            View::Detail => &name.singular,
            View::List => &name.plural,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The `mapSchema` entry of a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapSchema {
    /// A string naming a registered mapper.
    Named(String),
    /// Inline function source.
    Source(String),
}

/// One `detail` or `list` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub view: View,
    pub fields: String,
    pub relations: String,
    /// Extra query parameters, `&`-prefixed, or empty.
    pub params: String,
    pub map_schema: Option<MapSchema>,
}

impl Selection {
    /// Query path for the schema endpoint.
    pub fn query(&self, backend: &str) -> String {
        format!(
            "schema/{}?fields={}&rel={}{}",
            backend, self.fields, self.relations, self.params
        )
    }
}

/// A variable annotated `: EntitySchema`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaDeclaration {
    pub variable: String,
    pub name: EntityName,
    pub backend: EntityName,
    pub generate_types_file: bool,
    pub detail: Option<Selection>,
    pub list: Option<Selection>,
}

impl SchemaDeclaration {
    pub fn selections(&self) -> impl Iterator<Item = &Selection> {
        self.detail.iter().chain(self.list.iter())
    }
}

/// Every schema declaration of `file`, in document order.
pub fn declarations(
    workspace: &Workspace,
    file: &Path,
) -> Result<Vec<SchemaDeclaration>, SchemaError> {
    let session = workspace.session(file)?;
    let variables: Vec<String> = session
        .top_level_declarators()
        .into_iter()
        .filter(|d| is_schema_declarator(&session, *d))
        .filter_map(|d| session.field_text(d, "name").map(str::to_string))
        .collect();
    tracing::debug!(file = %file.display(), count = variables.len(), "schema declarations");

    variables
        .into_iter()
        .map(|variable| read_declaration(workspace, file, variable))
        .collect()
}

fn is_schema_declarator(session: &Session, declarator: Node<'_>) -> bool {
    declarator
        .child_by_field_name("type")
        .filter(|t| t.kind() == kinds::TYPE_ANNOTATION)
        .is_some_and(|t| session.text(t).trim_start_matches(':').trim() == SCHEMA_TYPE)
}

fn read_declaration(
    workspace: &Workspace,
    file: &Path,
    variable: String,
) -> Result<SchemaDeclaration, SchemaError> {
    let get = |key: &str| workspace.get_property_value(file, &format!("{}.{}", variable, key));

    let name_value = get("name")?.ok_or_else(|| SchemaError::MissingKey {
        variable: variable.clone(),
        key: "name",
    })?;
    let name = entity_name(&name_value).ok_or_else(|| SchemaError::InvalidKey {
        variable: variable.clone(),
        key: "name",
    })?;

    let backend = match get("backend")? {
        Some(value) if truthy(&value) => {
            entity_name(&value).ok_or_else(|| SchemaError::InvalidKey {
                variable: variable.clone(),
                key: "backend",
            })?
        }
        _ => name.clone(),
    };

    let generate_types_file = get("generateTypesFile")?.is_none_or(|v| truthy(&v));

    let detail = read_selection(workspace, file, &variable, View::Detail)?;
    let list = read_selection(workspace, file, &variable, View::List)?;

    Ok(SchemaDeclaration {
        variable,
        name,
        backend,
        generate_types_file,
        detail,
        list,
    })
}

fn read_selection(
    workspace: &Workspace,
    file: &Path,
    variable: &str,
    view: View,
) -> Result<Option<Selection>, SchemaError> {
    let prefix = format!("{}.{}", variable, view);
    if !workspace.exists_property_path(file, &prefix)? {
        return Ok(None);
    }
    let get = |key: &str| workspace.get_property_value(file, &format!("{}.{}", prefix, key));

    let fields = get("fields")?.map(|v| joined(&v, ",")).unwrap_or_default();
    let relations = get("relations")?
        .map(|v| joined(&v, ","))
        .unwrap_or_default();
    let params = match get("params")? {
        Some(value @ Value::Array(_)) => format!("&{}", joined(&value, "&")),
        _ => String::new(),
    };
    let map_schema = match get("mapSchema")? {
        Some(Value::String(name)) => Some(MapSchema::Named(name)),
        Some(Value::Code { text, .. }) => Some(MapSchema::Source(text)),
        _ => None,
    };

    Ok(Some(Selection {
        view,
        fields,
        relations,
        params,
        map_schema,
    }))
}

/// A string name is plural and its singular drops a trailing `s`.
pub fn entity_name(value: &Value) -> Option<EntityName> {
    match value {
        Value::String(plural) => Some(EntityName::from_plural(plural)),
        Value::Object(map) => {
            let singular = map.get("singular")?.as_str()?;
            let plural = map.get("plural")?.as_str()?;
            Some(EntityName::new(singular, plural))
        }
        _ => None,
    }
}

/// Arrays joined with `sep`, strings as they are, anything falsy empty.
fn joined(value: &Value, sep: &str) -> String {
    match value {
        Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(sep),
        other if truthy(other) => plain(other),
        _ => String::new(),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        other => other.to_source(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null | Value::Undefined => false,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
