//! Data model for cut-piece tag labels.
//!
//! - [`CatalogEntry`]: a product record from the remote catalog, keyed by style code
//! - [`RowRecord`]: one line of the uploaded cutting list
//! - [`LabelView`]: a row joined with its catalog entry, ready to render
//! - [`ExportState`]: busy flag and completion percentage of a PDF export

pub mod catalog;
pub mod export;
pub mod label;
pub mod row;

pub use catalog::{CatalogEntry, find_entry, parse_style_number};
pub use export::{ExportState, percent_of};
pub use label::{DEFAULT_PLACEHOLDER_NAME, LabelView, MISSING_PRICE, format_price};
pub use row::RowRecord;
