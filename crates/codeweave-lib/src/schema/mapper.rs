//! Post-fetch schema transformations.
//!
//! Schema declarations may carry a `mapSchema` entry. Mappers are looked up
//! by `"{SchemaVariable}.{detail|list}"` first, then by the string value of
//! `mapSchema`. Inline functions are never evaluated.

use std::collections::HashMap;
use std::fmt;

use codeweave_core::utils::last_segment;
use codeweave_core::{EntitySchema, FieldSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("no relation `{0}`")]
    UnknownRelation(String),

    #[error("no field `{field}` in `{relation}`")]
    UnknownField { relation: String, field: String },

    #[error("field `{field}` already exists in `{relation}`")]
    DuplicateField { relation: String, field: String },

    #[error("{0}")]
    Custom(String),
}

/// Transforms a fetched schema before synthesis.
pub trait SchemaMapper: Send + Sync {
    fn map(&self, schema: EntitySchema) -> Result<EntitySchema, MapError>;
}

impl<F> SchemaMapper for F
where
    F: Fn(EntitySchema) -> Result<EntitySchema, MapError> + Send + Sync,
{
    fn map(&self, schema: EntitySchema) -> Result<EntitySchema, MapError> {
        self(schema)
    }
}

/// Mappers by name.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: HashMap<String, Box<dyn SchemaMapper>>,
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.mappers.keys().collect();
        names.sort();
        f.debug_struct("MapperRegistry")
            .field("mappers", &names)
            .finish()
    }
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, mapper: impl SchemaMapper + 'static) {
        self.mappers.insert(name.into(), Box::new(mapper));
    }

    pub fn with(mut self, name: impl Into<String>, mapper: impl SchemaMapper + 'static) -> Self {
        self.register(name, mapper);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn SchemaMapper> {
        self.mappers.get(name).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

/// One step of a [`DeclarativeMapper`]. `relation` is a dotted alias path
/// from the root entity; empty means the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum MapOp {
    AddField {
        #[serde(default)]
        relation: String,
        field: FieldSchema,
    },
    RemoveField {
        #[serde(default)]
        relation: String,
        field: String,
    },
    /// Replace the last alias segment, which names the property.
    RenameAlias { relation: String, alias: String },
}

/// Mapper built from configuration rather than code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarativeMapper {
    #[serde(default)]
    pub ops: Vec<MapOp>,
}

impl DeclarativeMapper {
    pub fn new(ops: Vec<MapOp>) -> Self {
        Self { ops }
    }
}

impl SchemaMapper for DeclarativeMapper {
    fn map(&self, mut schema: EntitySchema) -> Result<EntitySchema, MapError> {
        for op in &self.ops {
            apply(&mut schema, op)?;
        }
        Ok(schema)
    }
}

fn apply(schema: &mut EntitySchema, op: &MapOp) -> Result<(), MapError> {
    match op {
        MapOp::AddField { relation, field } => {
            let target = relation_mut(schema, relation)?;
            if target.field(&field.field).is_some() {
                return Err(MapError::DuplicateField {
                    relation: relation.clone(),
                    field: field.field.clone(),
                });
            }
            target.fields.push(field.clone());
        }
        MapOp::RemoveField { relation, field } => {
            let target = relation_mut(schema, relation)?;
            let before = target.fields.len();
            target.fields.retain(|f| &f.field != field);
            if target.fields.len() == before {
                return Err(MapError::UnknownField {
                    relation: relation.clone(),
                    field: field.clone(),
                });
            }
        }
        MapOp::RenameAlias { relation, alias } => {
            let target = relation_mut(schema, relation)?;
            let old = last_segment(&target.table_alias).len();
            let prefix = &target.table_alias[..target.table_alias.len() - old];
            target.table_alias = format!("{}{}", prefix, alias);
        }
    }
    Ok(())
}

fn relation_mut<'a>(
    schema: &'a mut EntitySchema,
    path: &str,
) -> Result<&'a mut EntitySchema, MapError> {
    schema
        .relation_mut(path)
        .ok_or_else(|| MapError::UnknownRelation(path.to_string()))
}
