//! Codeweave: source-preserving rewriting of TypeScript configuration code and
//! schema-driven interface generation.
//!
//! # Example
//!
//! ```
//! use codeweave_lib::{MemoryStore, Value, Workspace};
//!
//! let store = MemoryStore::new();
//! store.insert("app.ts", "export const config = { api: { port: 8080 } };\n");
//!
//! let workspace = Workspace::new(Box::new(store));
//! let port = workspace.get_property_value("app.ts", "config.api.port").unwrap();
//! assert_eq!(port, Some(Value::Number(8080.0)));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod edit;
pub mod kinds;
pub mod language;
pub mod query;
pub mod resolve;
pub mod schema;
pub mod session;
pub mod typegen;
pub mod value;

#[cfg(test)]
mod value_tests;

pub use edit::{Anchor, EditError, Replacement, ReplacementBuffer};
pub use language::Lang;
pub use query::{NodeFilter, QueryOptions};
pub use resolve::{ResolveError, Resolution, ResolvedProperty};
pub use schema::{
    GenerateOptions, GenerateReport, SchemaError, SchemaFailure, SchemaGenerator,
};
pub use session::{FileStore, FsStore, MemoryStore, NodeRef, Session, SessionError, Workspace};
pub use typegen::{GeneratedInterface, RenderConfig, SynthError, Synthesizer};
pub use value::Value;

/// Top-level error wrapping every layer of the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Synth(#[from] SynthError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
