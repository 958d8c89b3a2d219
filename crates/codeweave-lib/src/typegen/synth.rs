//! Entity schema to interface synthesis.

use codeweave_core::utils::to_pascal_case;
use codeweave_core::{EntitySchema, FieldSchema};

use super::SynthError;
use super::column::ColumnType;
use super::types::{Interface, Member, TsType};

/// Relation nesting allowed below the root entity.
pub const MAX_DEPTH: usize = 32;

/// Builds interfaces from entity schemas.
///
/// Fields come first in schema order, then parent relations as nested
/// objects, then child relations as arrays of objects. A relation flagged
/// circular, or one that repeats the root entity, becomes a named reference.
/// Any other repeated ancestor is expanded again, bounded by [`MAX_DEPTH`].
#[derive(Debug, Default)]
pub struct Synthesizer {
    root_name: String,
    root_identity: Option<String>,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interface(&mut self, schema: &EntitySchema, name: &str) -> Result<Interface, SynthError> {
        self.root_name = name.to_string();
        self.root_identity = schema.identity().map(str::to_string);
        let members = self.members(schema, 0)?;
        Ok(Interface {
            name: name.to_string(),
            members,
        })
    }

    fn members(&mut self, entity: &EntitySchema, depth: usize) -> Result<Vec<Member>, SynthError> {
        if depth > MAX_DEPTH {
            return Err(SynthError::DepthExceeded(MAX_DEPTH));
        }
        let mut members = Vec::with_capacity(
            entity.fields.len() + entity.parent_tables.len() + entity.child_tables.len(),
        );

        for field in &entity.fields {
            members.push(Member::new(&field.field, field_type(field)?).optional(field.optional));
        }

        for parent in &entity.parent_tables {
            let name = parent
                .parent_property_name()
                .ok_or_else(|| missing_name(parent))?;
            let foreign_key = parent
                .relation
                .as_ref()
                .and_then(|r| entity.field(&r.child.field));
            let optional = foreign_key.is_none_or(FieldSchema::is_nullable);

            let ty = match self.reference_to(parent, name, depth) {
                Some(reference) => reference,
                None => TsType::Object(self.members(parent, depth + 1)?),
            };
            members.push(Member::new(name, ty).optional(optional));
        }

        for child in &entity.child_tables {
            let name = child
                .child_property_name()
                .ok_or_else(|| missing_name(child))?;
            let ty = match self.root_reference(child, name) {
                Some(reference) => reference,
                None => TsType::Object(self.members(child, depth + 1)?),
            };
            members.push(Member::new(name, TsType::Array(Box::new(ty))));
        }

        Ok(members)
    }

    /// Named reference for a parent relation that must not be expanded.
    fn reference_to(&self, parent: &EntitySchema, name: &str, depth: usize) -> Option<TsType> {
        if parent.is_circular_reference() {
            let target = if depth == 0 {
                self.root_name.clone()
            } else {
                to_pascal_case(name)
            };
            tracing::debug!(relation = name, target = %target, "circular parent");
            return Some(TsType::Reference(target));
        }
        self.root_reference(parent, name)
    }

    /// Reference to the root interface when `entity` has the root's identity.
    fn root_reference(&self, entity: &EntitySchema, name: &str) -> Option<TsType> {
        let identity = entity.identity()?;
        if self.root_identity.as_deref() != Some(identity) {
            return None;
        }
        tracing::debug!(relation = name, target = %self.root_name, "relation repeats the root");
        Some(TsType::Reference(self.root_name.clone()))
    }
}

/// Mapped type of a column, unioned with `null` when nullable.
pub fn field_type(field: &FieldSchema) -> Result<TsType, SynthError> {
    let ty = ColumnType::classify(&field.column_type)?.to_ts();
    Ok(if field.is_nullable() { ty.nullable() } else { ty })
}

fn missing_name(entity: &EntitySchema) -> SynthError {
    SynthError::MissingRelationName {
        alias: entity.table_alias.clone(),
    }
}
