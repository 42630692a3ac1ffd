//! Label rendering.
//!
//! Each [`LabelView`] is laid out as a fixed-size SVG tag (text block plus a QR
//! code carrying the order id) and captured to a bitmap through a
//! [`Rasterizer`]. The PDF exporter only depends on the trait, so tests can
//! substitute their own bitmaps.
//!
//! [`LabelView`]: tag_model::LabelView

mod error;
mod qr;
mod raster;
mod style;
mod svg;

pub use error::{RenderError, Result};
pub use qr::{PathData, QrMatrix};
pub use raster::{Rasterizer, SvgRasterizer, write_preview_png};
pub use style::{LABEL_HEIGHT, LABEL_WIDTH, LabelStyle, QR_SIZE};
pub use svg::{label_lines, render_svg};
