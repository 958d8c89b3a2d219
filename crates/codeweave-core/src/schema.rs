//! Entity schema model, as returned by the backend schema endpoint.
//!
//! Field records keep the column names of `SHOW COLUMNS` (`Field`, `Type`,
//! `Null`, …); everything else is camelCase.

use serde::{Deserialize, Serialize};

use crate::utils::{last_segment, singularize};

/// Singular and plural names of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityName {
    pub singular: String,
    pub plural: String,
}

impl EntityName {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Build from a bare (plural) name: `usuarios` → `usuario` / `usuarios`.
    pub fn from_plural(plural: &str) -> Self {
        Self::new(singularize(plural), plural)
    }
}

/// Column nullability as reported by the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nullability {
    #[serde(rename = "YES")]
    Yes,
    #[default]
    #[serde(rename = "NO")]
    No,
}

/// One column of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(rename = "Field")]
    pub field: String,
    /// Raw column type, e.g. `varchar(255)`, `tinyint(1)` or `[int]`.
    #[serde(rename = "Type")]
    pub column_type: String,
    #[serde(rename = "Null", default)]
    pub null: Nullability,
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(rename = "Extra", default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(rename = "virtual", default, skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl FieldSchema {
    pub fn new(field: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            column_type: column_type.into(),
            null: Nullability::No,
            key: None,
            default: None,
            extra: None,
            is_virtual: None,
            alias: None,
            optional: false,
        }
    }

    pub fn nullable(mut self, value: bool) -> Self {
        self.null = if value { Nullability::Yes } else { Nullability::No };
        self
    }

    pub fn optional(mut self, value: bool) -> Self {
        self.optional = value;
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.null == Nullability::Yes
    }
}

/// One side of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEnd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub field: String,
}

/// Foreign key linking a related table to the entity that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<RelationEnd>,
    pub child: RelationEnd,
    #[serde(default)]
    pub is_circular_reference: bool,
}

/// Structural description of a table-like entity and its relation graph.
///
/// Relations are entity schemas themselves: `parent_tables` are rows the
/// entity points to (rendered as nested objects), `child_tables` are rows
/// pointing back at it (rendered as arrays).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    #[serde(default)]
    pub table_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<EntityName>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_tables: Vec<EntitySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_tables: Vec<EntitySchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_parent_table: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_child_table: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<String>>,
}

impl EntitySchema {
    pub fn new(table_alias: impl Into<String>) -> Self {
        Self {
            table_alias: table_alias.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// Identity used to detect a relation that points back at the root entity.
    pub fn identity(&self) -> Option<&str> {
        self.table_name
            .as_deref()
            .or(self.entity_name.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn is_circular_reference(&self) -> bool {
        self.relation
            .as_ref()
            .is_some_and(|r| r.is_circular_reference)
    }

    /// Property name for this schema when embedded as a parent relation.
    pub fn parent_property_name(&self) -> Option<&str> {
        self.alias_name()
            .or_else(|| self.name.as_ref().map(|n| n.singular.as_str()))
            .filter(|s| !s.is_empty())
    }

    /// Property name for this schema when embedded as a child relation.
    pub fn child_property_name(&self) -> Option<&str> {
        self.alias_name()
            .or_else(|| self.name.as_ref().map(|n| n.plural.as_str()))
            .filter(|s| !s.is_empty())
    }

    fn alias_name(&self) -> Option<&str> {
        let last = last_segment(&self.table_alias);
        (!last.is_empty()).then_some(last)
    }

    /// Find a nested relation by a dotted alias path, matching the last
    /// alias segment of each level against parents first, then children.
    pub fn relation_mut(&mut self, path: &str) -> Option<&mut EntitySchema> {
        let mut current = self;
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            let position = current
                .parent_tables
                .iter()
                .position(|t| last_segment(&t.table_alias) == segment);
            current = match position {
                Some(i) => &mut current.parent_tables[i],
                None => {
                    let i = current
                        .child_tables
                        .iter()
                        .position(|t| last_segment(&t.table_alias) == segment)?;
                    &mut current.child_tables[i]
                }
            };
        }
        Some(current)
    }
}

/// Raw response of the schema endpoint: a single record is the contract,
/// a sequence signals a provider-side failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaResponse {
    Many(Vec<EntitySchema>),
    Single(EntitySchema),
}
