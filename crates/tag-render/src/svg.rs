//! SVG layout of a single tag.
//!
//! The label is a 378x189 canvas: a column of bold 12px text lines on the left,
//! the QR code in the top-right corner and the order id underneath it.

use std::fmt::{self, Write as _};

use quick_xml::escape::escape;

use tag_model::LabelView;

use crate::error::{RenderError, Result};
use crate::qr::QrMatrix;
use crate::style::{LABEL_HEIGHT, LABEL_WIDTH, LabelStyle, QR_SIZE};

const PADDING: u32 = 10;
const FONT_SIZE: u32 = 12;
const LINE_HEIGHT: u32 = 16;
/// Distance of the QR code and order id from the right edge.
const RIGHT_INSET: u32 = 32;
const QR_TOP: u32 = 40;
/// Baseline of the order id, measured from the bottom edge.
const ORDER_ID_BOTTOM: u32 = 44;

/// Text lines printed down the left side of the tag, top to bottom.
pub fn label_lines(view: &LabelView, style: &LabelStyle) -> Vec<String> {
    let row = &view.row;
    let mut lines = vec![
        format!("Product : {}", view.product_name),
        format!("Brand: {} | SKU: {}", style.brand, view.sku),
        capitalize_words(&format!("Color: {} | Size: {}", row.color, row.size)),
        format!(
            "MRP: {}{} (Incl. of all taxes)",
            style.currency_symbol, view.price
        ),
        "Net Qty: 1 | Unit: 1 Pcs".to_string(),
    ];
    let mut address = style.address_lines.iter();
    if let Some(first) = address.next() {
        lines.push(format!("MFG & MKT BY: {first}"));
    }
    lines.extend(address.cloned());
    lines.push(format!("Contact: {}", style.contact));
    lines
}

/// Render the tag for `view` as a standalone SVG document.
pub fn render_svg(view: &LabelView, style: &LabelStyle) -> Result<String> {
    let qr = QrMatrix::encode(view.qr_payload())?;
    let mut svg = String::with_capacity(4096);
    write_svg(&mut svg, view, style, &qr).map_err(|e| RenderError::Svg(e.to_string()))?;
    Ok(svg)
}

fn write_svg(out: &mut String, view: &LabelView, style: &LabelStyle, qr: &QrMatrix) -> fmt::Result {
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{LABEL_WIDTH}" height="{LABEL_HEIGHT}""#
    )?;
    write!(out, r#" viewBox="0 0 {LABEL_WIDTH} {LABEL_HEIGHT}">"#)?;
    write!(
        out,
        r##"<rect x="0" y="0" width="{LABEL_WIDTH}" height="{LABEL_HEIGHT}" fill="#ffffff"/>"##
    )?;

    let font_family = escape(style.font_family.as_str());
    write!(
        out,
        r##"<g font-family="{font_family}" font-size="{FONT_SIZE}" font-weight="bold""##
    )?;
    write!(out, r##" fill="#000000">"##)?;
    for (index, line) in label_lines(view, style).iter().enumerate() {
        let baseline = PADDING + FONT_SIZE + LINE_HEIGHT * index as u32;
        write!(
            out,
            r#"<text x="{PADDING}" y="{baseline}" xml:space="preserve">{}</text>"#,
            escape(line.as_str())
        )?;
    }
    write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="end" xml:space="preserve">Order Id: {}</text>"#,
        LABEL_WIDTH - RIGHT_INSET,
        LABEL_HEIGHT - ORDER_ID_BOTTOM,
        escape(view.order_id())
    )?;
    out.push_str("</g>");

    let module = QR_SIZE as f32 / qr.width().max(1) as f32;
    write!(
        out,
        r#"<g transform="translate({} {QR_TOP}) scale({module})" shape-rendering="crispEdges">"#,
        LABEL_WIDTH - RIGHT_INSET - QR_SIZE,
    )?;
    write!(out, r##"<path fill="#000000" d="{}"/></g>"##, qr.path_data())?;
    out.push_str("</svg>");
    Ok(())
}

/// Upper-case the first letter of every whitespace-separated word.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
