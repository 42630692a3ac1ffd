//! PDF export of tag labels.
//!
//! Labels are rasterized one at a time and each bitmap becomes one
//! 100x50 mm landscape page, in label order. Progress is published after every
//! page. Any failure aborts the export and no document is produced.

mod pdf;
mod progress;

pub use pdf::{DEFAULT_FILE_NAME, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PdfOutput, export_labels};
pub use progress::{NoProgress, ProgressSink};
