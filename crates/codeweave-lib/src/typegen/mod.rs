//! TypeScript interface generation from entity schemas.
//!
//! [`Synthesizer`] turns an [`EntitySchema`] into an [`Interface`] model and
//! [`render_interface`] prints it.

mod column;
mod config;
mod render;
mod synth;
mod types;

#[cfg(test)]
mod column_tests;

pub use column::ColumnType;
pub use config::RenderConfig;
pub use render::{render_interface, render_type, wrap_if_union};
pub use synth::{MAX_DEPTH, Synthesizer, field_type};
pub use types::{Interface, Member, TsType};

use codeweave_core::EntitySchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("Unrecognized database type '{0}'.")]
    UnrecognizedType(String),

    #[error("relation `{alias}` has neither an alias nor a name")]
    MissingRelationName { alias: String },

    #[error("relations nested deeper than {0} levels")]
    DepthExceeded(usize),
}

/// A rendered interface, ready to be written to a types file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterface {
    pub name: String,
    pub content: String,
}

/// Synthesize and render the interface `name` for `schema`.
pub fn generate(
    schema: &EntitySchema,
    name: &str,
    config: &RenderConfig,
) -> Result<GeneratedInterface, SynthError> {
    let interface = Synthesizer::new().interface(schema, name)?;
    Ok(GeneratedInterface {
        name: interface.name.clone(),
        content: render_interface(&interface, config),
    })
}
