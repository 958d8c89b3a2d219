//! `codeweave.toml` plus `CODEWEAVE_*` environment overrides.
//!
//! ```toml
//! fixtures = "schemas"
//! commented = true
//!
//! [api]
//! base_url = "https://api.example.com"
//! user_id = "1"
//! timeout_secs = 30
//!
//! [mappers."UsuariosSchema.detail"]
//! ops = [{ op = "remove-field", field = "password" }]
//! ```
//!
//! Nested keys are set from the environment with `__`:
//! `CODEWEAVE_API__BASE_URL`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use codeweave_lib::schema::{DeclarativeMapper, MapperRegistry};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "codeweave.toml";
pub const ENV_PREFIX: &str = "CODEWEAVE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    pub fixtures: Option<PathBuf>,
    #[serde(default)]
    pub commented: bool,
    /// Declarative mappers by registry name.
    #[serde(default)]
    pub mappers: BTreeMap<String, DeclarativeMapper>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSettings {
    pub base_url: Option<String>,
    pub user_id: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Settings {
    /// Load `explicit`, which must exist, or `./codeweave.toml` when present,
    /// then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(CONFIG_FILE, FileFormat::Toml).required(false),
        };
        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            mappers = settings.mappers.len(),
            fixtures = ?settings.fixtures,
            "configuration loaded"
        );
        Ok(settings)
    }

    pub fn mapper_registry(&self) -> MapperRegistry {
        self.mappers
            .iter()
            .fold(MapperRegistry::new(), |registry, (name, mapper)| {
                registry.with(name.clone(), mapper.clone())
            })
    }
}
