//! QR code module matrix for the order id.

use std::fmt;

use qrcode::{Color, EcLevel, QrCode};

use crate::error::{RenderError, Result};

/// Square grid of QR modules, row-major, `true` = dark. No quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode `payload` at error-correction level H.
    pub fn encode(payload: &str) -> Result<Self> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(|e| RenderError::Qr(e.to_string()))?;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(Self {
            width: code.width(),
            modules,
        })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// SVG path data with one unit square per dark module. Horizontal runs of
    /// dark modules are merged into a single rectangle.
    pub fn path_data(&self) -> PathData<'_> {
        PathData(self)
    }
}

/// Lazily formatted SVG path data of a [`QrMatrix`].
pub struct PathData<'a>(&'a QrMatrix);

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.0;
        for y in 0..matrix.width {
            let mut x = 0;
            while x < matrix.width {
                if !matrix.is_dark(x, y) {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < matrix.width && matrix.is_dark(x, y) {
                    x += 1;
                }
                let run = x - start;
                write!(f, "M{start} {y}h{run}v1h-{run}z")?;
            }
        }
        Ok(())
    }
}
