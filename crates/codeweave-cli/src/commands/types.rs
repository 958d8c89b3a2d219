//! Generate `*.types.ts` files from schema declarations.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use codeweave_core::Colors;
use codeweave_lib::schema::{
    FixtureSchemaProvider, HttpSchemaProvider, ProviderError, SCHEMA_SUFFIX, SchemaProvider,
};
use codeweave_lib::{GenerateOptions, GenerateReport, SchemaGenerator, Workspace};
use walkdir::WalkDir;

use super::exit_with;
use crate::settings::Settings;

pub struct TypesArgs {
    pub schema_path: PathBuf,
    /// `None` defers to the configuration file.
    pub commented: Option<bool>,
    pub verbose: bool,
    pub api_url: Option<String>,
    pub api_user: Option<String>,
    pub fixtures: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("{} does not exist", .0.display())]
    MissingPath(PathBuf),

    #[error("no schema endpoint: pass --api-url or --fixtures, or set api.base_url")]
    MissingEndpoint,

    #[error("no API user: pass --api-user or set api.user_id")]
    MissingUser,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub fn run(args: TypesArgs) {
    let settings = Settings::load(args.config.as_deref()).unwrap_or_else(|e| exit_with(e));
    let colors = Colors::new(args.color);

    let files = discover(&args.schema_path).unwrap_or_else(|e| exit_with(e));
    if files.is_empty() {
        eprintln!(
            "no {} files under {}",
            SCHEMA_SUFFIX,
            args.schema_path.display()
        );
        return;
    }
    eprintln!("found {} schema file(s)", files.len());

    let provider = provider(&args, &settings).unwrap_or_else(|e| exit_with(e));
    let options = GenerateOptions::new()
        .commented(args.commented.unwrap_or(settings.commented))
        .verbose(args.verbose);
    let generator = SchemaGenerator::new(Workspace::default(), provider)
        .mappers(settings.mapper_registry())
        .options(options);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| exit_with(e));
    let reports = runtime
        .block_on(generator.process_files(&files))
        .unwrap_or_else(|e| exit_with(e));

    print!("{}", summary(&reports, colors));
    if reports.iter().any(|r| !r.failures.is_empty()) {
        std::process::exit(1);
    }
}

/// `path` itself when it is a file, else every `*.schema.ts` below it in
/// path order. `node_modules` is never entered.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>, TypesError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(TypesError::MissingPath(path.to_path_buf()));
    }

    let files = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules")
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(SCHEMA_SUFFIX))
        .map(walkdir::DirEntry::into_path)
        .collect();
    Ok(files)
}

/// Fixtures win over the HTTP endpoint; flags win over configuration.
fn provider(args: &TypesArgs, settings: &Settings) -> Result<Box<dyn SchemaProvider>, TypesError> {
    if let Some(dir) = args.fixtures.as_ref().or(settings.fixtures.as_ref()) {
        tracing::info!(dir = %dir.display(), "reading schemas from fixtures");
        return Ok(Box::new(FixtureSchemaProvider::new(dir)));
    }

    let base_url = args
        .api_url
        .as_ref()
        .or(settings.api.base_url.as_ref())
        .ok_or(TypesError::MissingEndpoint)?;
    let user = args
        .api_user
        .as_ref()
        .or(settings.api.user_id.as_ref())
        .ok_or(TypesError::MissingUser)?;
    let provider = HttpSchemaProvider::new(base_url, user, settings.api.timeout())?;
    Ok(Box::new(provider))
}

/// Generated files, skipped declarations and a final error list.
pub fn summary(reports: &[GenerateReport], colors: Colors) -> String {
    let Colors {
        blue,
        green,
        red,
        bold,
        dim,
        reset,
    } = colors;
    let mut out = String::new();

    for report in reports {
        for variable in &report.skipped {
            let _ = writeln!(out, "{dim}skipped {variable} in {}{reset}", report.file.display());
        }
        if let Some(written) = &report.written {
            let names: Vec<&str> = report.interfaces.iter().map(|i| i.name.as_str()).collect();
            let _ = writeln!(
                out,
                "{green}generated{reset} {bold}{}{reset} {dim}({}){reset}",
                written.display(),
                names.join(", ")
            );
        }
    }

    let failures: Vec<_> = reports.iter().flat_map(|r| &r.failures).collect();
    if !failures.is_empty() {
        let _ = writeln!(out, "\n{red}{bold}ERRORS:{reset}");
        for failure in failures {
            let _ = writeln!(
                out,
                "  {dim}{}{reset} {blue}{}{reset}: {}",
                failure.file.display(),
                failure.interface,
                failure.message
            );
        }
    }
    out
}
