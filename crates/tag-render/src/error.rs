//! Error types for label rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering, rasterizing, or assembling labels.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The QR payload could not be encoded.
    #[error("failed to encode QR code: {0}")]
    Qr(String),

    /// The generated SVG could not be parsed.
    #[error("failed to parse label SVG: {0}")]
    Svg(String),

    /// Bitmap allocation or conversion failed.
    #[error("failed to rasterize label: {0}")]
    Raster(String),

    /// PDF assembly failed.
    #[error("failed to assemble PDF: {0}")]
    Pdf(String),

    /// There is nothing to export.
    #[error("no labels to export")]
    NoLabels,

    /// A specific label failed; the export was aborted.
    #[error("label {} failed: {source}", index + 1)]
    Label {
        index: usize,
        #[source]
        source: Box<RenderError>,
    },

    /// Writing a preview image failed.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl RenderError {
    /// Attach the index of the label being processed.
    #[must_use]
    pub fn for_label(self, index: usize) -> Self {
        if matches!(self, Self::Label { .. }) {
            return self;
        }
        Self::Label {
            index,
            source: Box::new(self),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
