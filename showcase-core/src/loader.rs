//! Catalog loader.
//!
//! The catalog is fetched exactly once at startup. Any failure (missing
//! file, network error, non-2xx status, malformed JSON) is one error kind
//! for the user: the card region shows [`LOAD_FAILURE_MESSAGE`]. The
//! variants below only exist for the log line.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::config::ShowcaseConfig;

pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load sample data. Please check data.json file.";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// What the page shows, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

/// Where the catalog document comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path).await.map_err(|source| LoadError::Io {
            path: self.describe(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Same-origin style HTTP fetch.
pub struct HttpSource {
    http: Client,
    url: String,
}

impl std::fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSource").field("url", &self.url).finish()
    }
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: &str, http: Client) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let network = |source: reqwest::Error| LoadError::Network {
            url: self.url.clone(),
            source,
        };

        let resp = self.http.get(&self.url).send().await.map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(network)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick the source for `config.data`.
pub fn source_for(config: &ShowcaseConfig) -> Box<dyn CatalogSource> {
    if config.is_remote() {
        Box::new(HttpSource::new(&config.data))
    } else {
        Box::new(FileSource::new(&config.data))
    }
}

pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog, LoadError> {
    let result = match source.fetch().await {
        Ok(bytes) => Catalog::from_slice(&bytes).map_err(LoadError::from),
        Err(e) => Err(e),
    };

    match &result {
        Ok(catalog) => info!("Loaded {} samples from {}", catalog.len(), source.describe()),
        Err(e) => error!("Error loading data: {}", e),
    }

    result
}
