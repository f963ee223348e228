//! Page configuration.
//!
//! Everything has a default, so an empty `{}` config file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_DATA: &str = "data.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// File path, or an `http(s)://` URL.
    pub data: String,
    pub assets_dir: String,
    /// `data-filter` values of the framework buttons, without the `all` button.
    pub frameworks: Vec<String>,
    /// `data-version` values of the version buttons, without the `all` button.
    pub versions: Vec<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            frameworks: Vec::new(),
            versions: Vec::new(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn is_remote(&self) -> bool {
        self.data.starts_with("http://") || self.data.starts_with("https://")
    }
}

pub fn asset_path(assets_dir: &str, file: &str) -> String {
    let dir = assets_dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
