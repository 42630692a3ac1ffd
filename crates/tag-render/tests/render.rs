//! Label text and rasterization.

use image::RgbImage;
use tag_model::{CatalogEntry, DEFAULT_PLACEHOLDER_NAME, LabelView, RowRecord};
use tag_render::{LabelStyle, Rasterizer, SvgRasterizer, label_lines, write_preview_png};

fn unmatched_view() -> LabelView {
    let row = RowRecord::new("QRV1", "M", "Red", "ORD1001");
    let catalog = [CatalogEntry::new(1, "Flared Kurta", 1299.0)];
    LabelView::join(&row, &catalog, DEFAULT_PLACEHOLDER_NAME)
}

/// Dark pixels left of the QR code, where the text block is drawn.
fn text_column_ink(image: &RgbImage) -> usize {
    let qr_left = 266 * image.width() / 378;
    image
        .enumerate_pixels()
        .filter(|(x, _, pixel)| *x < qr_left && pixel.0.iter().all(|channel| *channel < 128))
        .count()
}

#[test]
fn unmatched_label_text() {
    let lines = label_lines(&unmatched_view(), &LabelStyle::default());
    insta::assert_snapshot!(lines.join("\n"), @r"
    Product : Qurvii Product
    Brand: Qurvii | SKU: QRV1-Red-M
    Color: Red | Size: M
    MRP: ₹NA (Incl. of all taxes)
    Net Qty: 1 | Unit: 1 Pcs
    MFG & MKT BY: Qurvii, 2nd Floor, B-149
    Sector-6, Noida, UP, 201301
    Contact: support@qurvii.com
    ");
}

#[test]
fn matched_label_text_uses_configured_boilerplate() {
    let row = RowRecord::new("1", "xl", "navy blue", "ORD7");
    let view = LabelView::join(&row, &[CatalogEntry::new(1, "Flared Kurta", 1299.0)], "Unused");
    let style = LabelStyle {
        brand: "Acme".to_string(),
        address_lines: vec!["Unit 4, Mill Road".to_string()],
        contact: "hello@acme.test".to_string(),
        currency_symbol: "Rs. ".to_string(),
        ..LabelStyle::default()
    };
    let lines = label_lines(&view, &style);
    insta::assert_snapshot!(lines.join("\n"), @r"
    Product : Flared Kurta
    Brand: Acme | SKU: 1-navy blue-xl
    Color: Navy Blue | Size: Xl
    MRP: Rs. 1299 (Incl. of all taxes)
    Net Qty: 1 | Unit: 1 Pcs
    MFG & MKT BY: Unit 4, Mill Road
    Contact: hello@acme.test
    ");
}

#[test]
fn rasterizes_to_scaled_label_size() {
    let rasterizer = SvgRasterizer::new(LabelStyle::default()).unwrap();
    let image = rasterizer.rasterize(&unmatched_view()).unwrap();
    assert_eq!(image.dimensions(), (756, 378));
    // Background is white; the QR finder pattern (top-left module of the
    // code at x=266, y=40 in label units) is black.
    assert_eq!(image.get_pixel(2, 2).0, [255, 255, 255]);
    assert_eq!(image.get_pixel(266 * 2 + 2, 40 * 2 + 2).0, [0, 0, 0]);
}

#[test]
fn preview_png_is_written_with_one_based_name() {
    let dir = tempfile::tempdir().unwrap();
    let rasterizer = SvgRasterizer::new(LabelStyle {
        raster_scale: 1.0,
        ..LabelStyle::default()
    })
    .unwrap();
    let image = rasterizer.rasterize(&unmatched_view()).unwrap();
    let path = write_preview_png(&image, dir.path(), 0).unwrap();
    assert_eq!(path.file_name().unwrap(), "tag-0001.png");
    assert!(path.exists());
}

#[test]
fn default_style_draws_label_text() {
    let rasterizer = SvgRasterizer::new(LabelStyle::default()).unwrap();
    let image = rasterizer.rasterize(&unmatched_view()).unwrap();
    let ink = text_column_ink(&image);
    assert!(ink > 500, "text column has only {ink} dark pixels");
}

#[test]
fn missing_font_family_falls_back_to_an_installed_face() {
    let rasterizer = SvgRasterizer::new(LabelStyle {
        font_family: "No Such Typeface".to_string(),
        ..LabelStyle::default()
    })
    .unwrap();
    let image = rasterizer.rasterize(&unmatched_view()).unwrap();
    let ink = text_column_ink(&image);
    assert!(ink > 500, "text column has only {ink} dark pixels");
}
