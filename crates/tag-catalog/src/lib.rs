//! Product catalog loading.
//!
//! The catalog is fetched once per session and held in memory. A failed fetch
//! degrades to an empty catalog: rows then render with fallback values.
//!
//! # Example
//!
//! ```no_run
//! use tag_catalog::{CatalogCache, CatalogSource};
//!
//! let cache = CatalogCache::start(CatalogSource::parse("https://example.com/api/product"));
//! // ... ingest the CSV while the fetch runs ...
//! let entries = cache.wait();
//! println!("{} catalog entries", entries.len());
//! ```

mod cache;
mod client;
mod decode;
mod error;
mod source;

pub use cache::{CatalogCache, CatalogStatus};
pub use client::{CatalogClient, load_catalog};
pub use decode::decode_catalog;
pub use error::{CatalogError, Result};
pub use source::{CatalogSource, DEFAULT_CATALOG_URL};
