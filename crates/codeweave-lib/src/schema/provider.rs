//! Sources of entity schemas.

use std::path::PathBuf;
use std::time::Duration;

use codeweave_core::SchemaResponse;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Answers `schema/{backend}?fields=…&rel=…` queries.
#[async_trait::async_trait]
pub trait SchemaProvider: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<SchemaResponse, ProviderError>;
}

/// The backend schema endpoint, authenticated as the server.
pub struct HttpSchemaProvider {
    http: reqwest::Client,
    base_url: String,
    user_id: String,
}

impl HttpSchemaProvider {
    pub fn new(
        base_url: impl Into<String>,
        user_id: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| ProviderError::Http {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self {
            http,
            base_url,
            user_id: user_id.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl SchemaProvider for HttpSchemaProvider {
    async fn fetch(&self, query: &str) -> Result<SchemaResponse, ProviderError> {
        let url = format!("{}/{}", self.base_url, query.trim_start_matches('/'));
        let http_error = |source| ProviderError::Http {
            url: url.clone(),
            source,
        };

        tracing::debug!(url = %url, "requesting schema");
        let body = self
            .http
            .get(&url)
            .header("Authorization", "SERVER")
            .header("Authorization-User", &self.user_id)
            .header("Content-Type", "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_error)?
            .text()
            .await
            .map_err(http_error)?;

        serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
            origin: url.clone(),
            source,
        })
    }
}

/// Schemas stored as `{dir}/{backend}.json`, for offline runs and tests.
#[derive(Clone, Debug)]
pub struct FixtureSchemaProvider {
    dir: PathBuf,
}

impl FixtureSchemaProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Fixture file answering `query`.
    pub fn fixture_path(&self, query: &str) -> PathBuf {
        self.dir.join(format!("{}.json", backend_of(query)))
    }
}

#[async_trait::async_trait]
impl SchemaProvider for FixtureSchemaProvider {
    async fn fetch(&self, query: &str) -> Result<SchemaResponse, ProviderError> {
        let path = self.fixture_path(query);
        tracing::debug!(path = %path.display(), "reading schema fixture");
        let content = std::fs::read_to_string(&path).map_err(|source| ProviderError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ProviderError::Decode {
            origin: path.display().to_string(),
            source,
        })
    }
}

/// `schema/usuarios?fields=…` → `usuarios`.
pub fn backend_of(query: &str) -> &str {
    let path = query.split('?').next().unwrap_or(query);
    path.trim_start_matches('/')
        .strip_prefix("schema/")
        .unwrap_or(path)
}
