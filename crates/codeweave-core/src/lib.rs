#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for codeweave.
//!
//! - **Schema layer**: 1:1 mapping of the entity schema JSON served by the
//!   backend (`schema/{entity}?fields=…&rel=…`)
//! - **Utilities**: identifier case conversion and entity naming
//! - **Colors**: ANSI palette shared by the CLI and the type renderer

pub mod colors;
pub mod schema;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use schema::{
    EntityName, EntitySchema, FieldSchema, Nullability, RelationEnd, RelationSchema,
    SchemaResponse,
};
