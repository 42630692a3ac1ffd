//! Cutting-list ingestion.
//!
//! Reads the uploaded CSV into an ordered sequence of [`RowRecord`]s, one per
//! non-blank data line. Extraction is best-effort: missing columns or short
//! lines produce empty fields rather than errors.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tag_ingest::ingest_path;
//!
//! let rows = ingest_path(Path::new("cutting_list.csv"))?;
//! for row in &rows {
//!     println!("{} {}", row.style_number, row.order_id);
//! }
//! # Ok::<(), tag_ingest::IngestError>(())
//! ```
//!
//! [`RowRecord`]: tag_model::RowRecord

mod columns;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Column Layout ===
pub use columns::{COLOR_COLUMN, ColumnLayout, ORDER_ID_COLUMN, SIZE_COLUMN, STYLE_NUMBER_COLUMN};

// === CSV Reading ===
pub use reader::{SAMPLE_CSV, ingest_path, ingest_reader};
