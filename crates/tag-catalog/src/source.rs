use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Inventory API serving the product list.
pub const DEFAULT_CATALOG_URL: &str = "https://inventorybackend-m1z8.onrender.com/api/product";

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// HTTP(S) endpoint returning a JSON array. `timeout` of `None` waits forever.
    Http {
        url: String,
        timeout: Option<Duration>,
    },
    /// Local JSON file with the same shape as the HTTP response.
    File(PathBuf),
}

impl CatalogSource {
    /// URLs with an `http://` or `https://` scheme are fetched, anything else
    /// is treated as a file path.
    pub fn parse(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http {
                url: value.to_string(),
                timeout: None,
            }
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Set the request timeout. No effect on file sources.
    #[must_use]
    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        match self {
            Self::Http { url, .. } => Self::Http { url, timeout },
            file => file,
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::parse(DEFAULT_CATALOG_URL)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, .. } => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
