//! Row/catalog join that feeds the label renderer.

use serde::Serialize;

use crate::catalog::{CatalogEntry, find_entry};
use crate::row::RowRecord;

/// Product name shown when a row has no catalog match.
pub const DEFAULT_PLACEHOLDER_NAME: &str = "Qurvii Product";

/// Price marker shown when a row has no priced catalog match.
pub const MISSING_PRICE: &str = "NA";

/// A row joined with at most one catalog entry.
///
/// Recomputed whenever labels are rendered; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    pub row: RowRecord,
    pub matched: Option<CatalogEntry>,
    pub product_name: String,
    pub price: String,
    pub sku: String,
}

impl LabelView {
    /// Join `row` against `catalog`, falling back to `placeholder_name` and
    /// [`MISSING_PRICE`] when nothing usable matches.
    pub fn join(row: &RowRecord, catalog: &[CatalogEntry], placeholder_name: &str) -> Self {
        let matched = find_entry(catalog, &row.style_number).cloned();
        let product_name = matched
            .as_ref()
            .map(|entry| entry.style_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(placeholder_name)
            .to_string();
        let price = matched
            .as_ref()
            .and_then(|entry| format_price(entry.mrp))
            .unwrap_or_else(|| MISSING_PRICE.to_string());
        Self {
            sku: row.sku(),
            row: row.clone(),
            matched,
            product_name,
            price,
        }
    }

    /// Join every row in order.
    pub fn join_all(
        rows: &[RowRecord],
        catalog: &[CatalogEntry],
        placeholder_name: &str,
    ) -> Vec<Self> {
        rows.iter()
            .map(|row| Self::join(row, catalog, placeholder_name))
            .collect()
    }

    /// Payload encoded in the QR code.
    pub fn qr_payload(&self) -> &str {
        &self.row.order_id
    }

    pub fn order_id(&self) -> &str {
        &self.row.order_id
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Display form of a catalog price; `None` for zero or non-finite prices.
pub fn format_price(mrp: f64) -> Option<String> {
    if mrp == 0.0 || !mrp.is_finite() {
        None
    } else {
        Some(mrp.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(1, "Flared Kurta", 1299.0),
            CatalogEntry::new(2, "", 899.5),
            CatalogEntry::new(3, "Palazzo", 0.0),
        ]
    }

    #[test]
    fn matched_row_uses_catalog_values() {
        let row = RowRecord::new("1", "M", "Red", "ORD1");
        let view = LabelView::join(&row, &catalog(), DEFAULT_PLACEHOLDER_NAME);
        assert!(view.is_matched());
        assert_eq!(view.product_name, "Flared Kurta");
        assert_eq!(view.price, "1299");
        assert_eq!(view.sku, "1-Red-M");
    }

    #[test]
    fn unmatched_row_uses_fallbacks() {
        let row = RowRecord::new("QRV1", "M", "Red", "ORD1001");
        let view = LabelView::join(&row, &catalog(), DEFAULT_PLACEHOLDER_NAME);
        assert!(!view.is_matched());
        assert_eq!(view.product_name, "Qurvii Product");
        assert_eq!(view.price, "NA");
        assert_eq!(view.sku, "QRV1-Red-M");
        assert_eq!(view.qr_payload(), "ORD1001");
    }

    #[test]
    fn empty_name_and_zero_price_fall_back_individually() {
        let row = RowRecord::new("2", "S", "Blue", "A");
        let unnamed = LabelView::join(&row, &catalog(), "Fallback");
        assert_eq!(unnamed.product_name, "Fallback");
        assert_eq!(unnamed.price, "899.5");

        let row = RowRecord::new("3", "S", "Blue", "B");
        let unpriced = LabelView::join(&row, &catalog(), "Fallback");
        assert_eq!(unpriced.product_name, "Palazzo");
        assert_eq!(unpriced.price, "NA");
    }

    #[test]
    fn blank_style_number_matches_code_zero() {
        let zero = vec![CatalogEntry::new(0, "Zero", 10.0)];
        let view = LabelView::join(&RowRecord::new(" ", "", "", ""), &zero, "Fallback");
        assert!(view.is_matched());
        assert_eq!(view.product_name, "Zero");
        assert_eq!(view.price, "10");

        let view = LabelView::join(&RowRecord::new("", "", "", ""), &catalog(), "Fallback");
        assert!(!view.is_matched());
    }

    #[test]
    fn hex_style_number_matches_decimal_code() {
        let hex = vec![CatalogEntry::new(16, "Hex", 0.0)];
        let view = LabelView::join(&RowRecord::new("0x10", "M", "Red", "A"), &hex, "Fallback");
        assert!(view.is_matched());
        assert_eq!(view.product_name, "Hex");
    }

    #[test]
    fn join_all_preserves_row_order() {
        let rows = vec![
            RowRecord::new("3", "L", "Green", "C"),
            RowRecord::new("1", "S", "Red", "A"),
            RowRecord::new("9", "M", "Blue", "B"),
        ];
        let views = LabelView::join_all(&rows, &catalog(), DEFAULT_PLACEHOLDER_NAME);
        let ids: Vec<&str> = views.iter().map(LabelView::order_id).collect();
        assert_eq!(ids, ["C", "A", "B"]);
    }
}
