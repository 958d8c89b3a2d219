//! Interface generation for `*.schema.ts` files.
//!
//! Each variable annotated `: EntitySchema` names an entity and a `detail`
//! and/or `list` selection. For every selection the schema endpoint is
//! queried, the response is optionally mapped, and an interface is
//! synthesized. The interfaces of one file land in `{stem}.types.ts` next to
//! it, and a sibling `index.ts` re-exports them.

mod barrel;
mod mapper;
mod provider;
mod selection;

#[cfg(test)]
mod mapper_tests;
#[cfg(test)]
mod selection_tests;

use std::path::{Path, PathBuf};

use codeweave_core::utils::to_pascal_case;
use codeweave_core::{EntitySchema, SchemaResponse};

pub use barrel::{INDEX_FILE, update_barrel};
pub use mapper::{DeclarativeMapper, MapError, MapOp, MapperRegistry, SchemaMapper};
pub use provider::{
    FixtureSchemaProvider, HttpSchemaProvider, ProviderError, SchemaProvider, backend_of,
};
pub use selection::{
    MapSchema, SCHEMA_TYPE, SchemaDeclaration, Selection, View, declarations, entity_name,
};

use crate::resolve::ResolveError;
use crate::session::{SessionError, Workspace, normalize_path};
use crate::typegen::{self, GeneratedInterface, RenderConfig, SynthError};

pub const SCHEMA_SUFFIX: &str = ".schema.ts";
pub const TYPES_SUFFIX: &str = ".types.ts";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("the schema endpoint answered `{query}` with a list instead of a schema")]
    FetchContract { query: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("cannot evaluate `{code}`: register a mapper named `{key}`")]
    Evaluation { key: String, code: String },

    #[error("mapper `{name}` failed: {source}")]
    Mapper {
        name: String,
        #[source]
        source: MapError,
    },

    #[error("no mapper registered as `{0}`")]
    UnknownMapper(String),

    #[error(transparent)]
    Synth(#[from] SynthError),

    #[error("`{variable}` has no `{key}`")]
    MissingKey { variable: String, key: &'static str },

    #[error("`{variable}.{key}` must be a string or {{ singular, plural }}")]
    InvalidKey { variable: String, key: &'static str },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SchemaError {
    /// Whether the error stops the whole batch instead of one entity.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SchemaError::Session(_) | SchemaError::Resolve(ResolveError::Session(_))
        )
    }
}

/// Options for [`SchemaGenerator`].
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Prepend the documentation comment to each interface
    pub(crate) commented: bool,
    /// Log every query and step
    pub(crate) verbose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            commented: true,
            verbose: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commented(mut self, value: bool) -> Self {
        self.commented = value;
        self
    }

    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }
}

/// An entity whose interface could not be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFailure {
    pub file: PathBuf,
    pub interface: String,
    pub message: String,
}

/// Outcome of one schema file.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub file: PathBuf,
    pub interfaces: Vec<GeneratedInterface>,
    pub failures: Vec<SchemaFailure>,
    /// Variables with `generateTypesFile: false`.
    pub skipped: Vec<String>,
    /// Types file written, if any interface was generated.
    pub written: Option<PathBuf>,
    /// Whether a sibling `index.ts` was updated.
    pub indexed: bool,
}

/// Runs schema files through fetch, mapping, synthesis and output.
pub struct SchemaGenerator {
    workspace: Workspace,
    provider: Box<dyn SchemaProvider>,
    mappers: MapperRegistry,
    options: GenerateOptions,
}

impl SchemaGenerator {
    pub fn new(workspace: Workspace, provider: Box<dyn SchemaProvider>) -> Self {
        Self {
            workspace,
            provider,
            mappers: MapperRegistry::new(),
            options: GenerateOptions::default(),
        }
    }

    pub fn mappers(mut self, mappers: MapperRegistry) -> Self {
        self.mappers = mappers;
        self
    }

    pub fn options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Process files one after another. Entity failures are collected;
    /// unreadable or unparsable files abort the batch.
    pub async fn process_files<P: AsRef<Path>>(
        &self,
        files: &[P],
    ) -> Result<Vec<GenerateReport>, SchemaError> {
        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            reports.push(self.process_file(file).await?);
        }
        Ok(reports)
    }

    pub async fn process_file(&self, file: impl AsRef<Path>) -> Result<GenerateReport, SchemaError> {
        let file = normalize_path(file.as_ref());
        let mut report = GenerateReport {
            file: file.clone(),
            ..GenerateReport::default()
        };

        for declaration in declarations(&self.workspace, &file)? {
            if !declaration.generate_types_file {
                tracing::info!(variable = %declaration.variable, "types generation skipped");
                report.skipped.push(declaration.variable);
                continue;
            }
            if self.options.verbose {
                tracing::info!(variable = %declaration.variable, "processing schema");
            }

            for selection in declaration.selections() {
                let interface = to_pascal_case(selection.view.pick(&declaration.name));
                if report.interfaces.iter().any(|i| i.name == interface) {
                    tracing::warn!(interface = %interface, file = %file.display(), "duplicate interface skipped");
                    continue;
                }

                match self.process_entity(&declaration, selection, &interface).await {
                    Ok(generated) => report.interfaces.push(generated),
                    Err(err) if err.is_fatal() => return Err(err),
                    Err(err) => {
                        tracing::warn!(interface = %interface, error = %err, "entity failed");
                        report.failures.push(SchemaFailure {
                            file: file.clone(),
                            interface,
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        if !report.interfaces.is_empty() {
            self.write_output(&mut report)?;
        }
        Ok(report)
    }

    async fn process_entity(
        &self,
        declaration: &SchemaDeclaration,
        selection: &Selection,
        interface: &str,
    ) -> Result<GeneratedInterface, SchemaError> {
        let query = selection.query(selection.view.pick(&declaration.backend));
        if self.options.verbose {
            tracing::info!(query = %query, "requesting schema");
        } else {
            tracing::debug!(query = %query, "requesting schema");
        }

        let schema = match self.provider.fetch(&query).await? {
            SchemaResponse::Single(schema) => schema,
            SchemaResponse::Many(_) => return Err(SchemaError::FetchContract { query }),
        };
        let schema = self.map_schema(declaration, selection, schema)?;

        let config = RenderConfig::new().commented(self.options.commented);
        Ok(typegen::generate(&schema, interface, &config)?)
    }

    fn map_schema(
        &self,
        declaration: &SchemaDeclaration,
        selection: &Selection,
        schema: EntitySchema,
    ) -> Result<EntitySchema, SchemaError> {
        let key = format!("{}.{}", declaration.variable, selection.view);
        let name = match (&selection.map_schema, self.mappers.get(&key)) {
            (_, Some(_)) => key,
            (None, None) => return Ok(schema),
            (Some(MapSchema::Named(name)), None) => name.clone(),
            (Some(MapSchema::Source(code)), None) => {
                return Err(SchemaError::Evaluation {
                    key,
                    code: code.clone(),
                });
            }
        };
        let mapper = self
            .mappers
            .get(&name)
            .ok_or_else(|| SchemaError::UnknownMapper(name.clone()))?;
        tracing::debug!(mapper = %name, "mapping schema");
        mapper
            .map(schema)
            .map_err(|source| SchemaError::Mapper { name, source })
    }

    fn write_output(&self, report: &mut GenerateReport) -> Result<(), SchemaError> {
        let types_path = types_file_path(&report.file);
        let content = report
            .interfaces
            .iter()
            .map(|i| i.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        self.workspace.write(&types_path, &content)?;
        tracing::info!(
            file = %types_path.display(),
            interfaces = report.interfaces.len(),
            "types written"
        );

        let dir = types_path.parent().unwrap_or(Path::new(""));
        let module = types_module(&types_path);
        let names: Vec<&str> = report.interfaces.iter().map(|i| i.name.as_str()).collect();
        report.indexed = update_barrel(&self.workspace, dir, &module, &names)?;
        report.written = Some(types_path);
        Ok(())
    }
}

/// `a/usuarios.schema.ts` → `a/usuarios.types.ts`.
pub fn types_file_path(schema_file: &Path) -> PathBuf {
    let name = schema_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name
        .strip_suffix(SCHEMA_SUFFIX)
        .or_else(|| name.strip_suffix(".ts"))
        .unwrap_or(&name);
    schema_file.with_file_name(format!("{}{}", stem, TYPES_SUFFIX))
}

/// Import specifier stem of a types file: `usuarios.types`.
fn types_module(types_path: &Path) -> String {
    let name = types_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".ts").unwrap_or(&name).to_string()
}
