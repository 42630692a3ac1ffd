//! Sequential label-to-page assembly.

use std::time::Instant;

use image::RgbImage;
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, PdfLayerReference,
    Px,
};
use tracing::{debug, info, info_span};

use tag_model::{LabelView, percent_of};
use tag_render::{Rasterizer, RenderError, Result};

use crate::progress::ProgressSink;

/// Page width in millimetres (landscape).
pub const PAGE_WIDTH_MM: f32 = 100.0;
/// Page height in millimetres (landscape).
pub const PAGE_HEIGHT_MM: f32 = 50.0;
/// File name offered for the finished document.
pub const DEFAULT_FILE_NAME: &str = "tag-labels.pdf";

const LAYER_NAME: &str = "Label";
const MM_PER_INCH: f32 = 25.4;

/// A fully assembled document.
#[derive(Debug, Clone)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Rasterize every label in order and assemble one page per label.
///
/// Label `i + 1` is only rasterized after page `i` has been placed and its
/// progress published, so at most one bitmap is alive at a time.
pub fn export_labels(
    labels: &[LabelView],
    rasterizer: &dyn Rasterizer,
    progress: &mut dyn ProgressSink,
) -> Result<PdfOutput> {
    if labels.is_empty() {
        return Err(RenderError::NoLabels);
    }

    let span = info_span!("export", label_count = labels.len());
    let _guard = span.enter();
    let start = Instant::now();
    let total = labels.len();

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Tag Labels",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    for (index, label) in labels.iter().enumerate() {
        let bitmap = rasterizer
            .rasterize(label)
            .map_err(|err| err.for_label(index))?;

        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = doc.get_page(page).get_layer(layer);
        place_full_page(&layer, bitmap).map_err(|err| err.for_label(index))?;

        let percent = percent_of(index + 1, total);
        debug!(page = index + 1, percent, "label placed");
        progress.publish(percent);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|err| RenderError::Pdf(err.to_string()))?;

    info!(
        pages = total,
        size_bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "PDF assembled"
    );
    Ok(PdfOutput {
        bytes,
        pages: total,
    })
}

/// Place `bitmap` at the page origin, stretched to exactly fill the page.
fn place_full_page(layer: &PdfLayerReference, bitmap: RgbImage) -> Result<()> {
    let (width, height) = bitmap.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::Raster("empty bitmap".to_string()));
    }

    // At this DPI the bitmap is exactly one page wide; scale_y corrects any
    // aspect-ratio drift so it is also exactly one page tall.
    let dpi = width as f32 * MM_PER_INCH / PAGE_WIDTH_MM;
    let natural_height_mm = height as f32 * MM_PER_INCH / dpi;

    let image = Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: bitmap.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(0.0)),
            scale_x: Some(1.0),
            scale_y: Some(PAGE_HEIGHT_MM / natural_height_mm),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
    Ok(())
}
