//! Optional TOML configuration.
//!
//! ```toml
//! [catalog]
//! endpoint = "https://inventory.example/api/product"
//! timeout_secs = 20
//!
//! [label]
//! brand = "Qurvii"
//! currency_symbol = "Rs. "
//!
//! [output]
//! file_name = "tags.pdf"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use tag_catalog::{CatalogSource, DEFAULT_CATALOG_URL};
use tag_render::LabelStyle;
use tag_report::DEFAULT_FILE_NAME;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub label: LabelStyle,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// URL or local JSON file.
    pub endpoint: String,
    /// Absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Defaults when no file is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse TOML text; `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Catalog source from the `--catalog` flag if given, else the file.
    pub fn catalog_source(&self, flag: Option<&str>) -> CatalogSource {
        let endpoint = flag.unwrap_or(&self.catalog.endpoint);
        let timeout = self.catalog.timeout_secs.map(Duration::from_secs);
        CatalogSource::parse(endpoint).with_timeout(timeout)
    }

    /// Output path from the `--output` flag if given, else the file.
    pub fn output_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map_or_else(|| PathBuf::from(&self.output.file_name), Path::to_path_buf)
    }
}
