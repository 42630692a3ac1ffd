//! Fixed boilerplate and typography of the printed tag.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use tag_model::DEFAULT_PLACEHOLDER_NAME;

/// Label width in SVG user units (CSS pixels).
pub const LABEL_WIDTH: u32 = 378;
/// Label height in SVG user units (CSS pixels).
pub const LABEL_HEIGHT: u32 = 189;
/// Edge length of the QR code in user units.
pub const QR_SIZE: u32 = 80;

/// Text and rendering settings shared by every label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub brand: String,
    /// Product name for rows without a catalog match.
    pub placeholder_name: String,
    /// Manufacturer address; the first line is prefixed with `MFG & MKT BY:`.
    pub address_lines: Vec<String>,
    pub contact: String,
    pub currency_symbol: String,
    pub font_family: String,
    /// Extra font loaded before system fonts.
    pub font_file: Option<PathBuf>,
    /// Pixels per user unit when rasterizing.
    pub raster_scale: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            brand: "Qurvii".to_string(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            address_lines: vec![
                "Qurvii, 2nd Floor, B-149".to_string(),
                "Sector-6, Noida, UP, 201301".to_string(),
            ],
            contact: "support@qurvii.com".to_string(),
            currency_symbol: "\u{20b9}".to_string(),
            font_family: "sans-serif".to_string(),
            font_file: None,
            raster_scale: 2.0,
        }
    }
}

impl LabelStyle {
    /// Bitmap size in pixels for the configured scale.
    pub fn raster_size(&self) -> (u32, u32) {
        let scale = if self.raster_scale.is_finite() && self.raster_scale > 0.0 {
            self.raster_scale
        } else {
            1.0
        };
        (
            ((LABEL_WIDTH as f32) * scale).round().max(1.0) as u32,
            ((LABEL_HEIGHT as f32) * scale).round().max(1.0) as u32,
        )
    }
}
