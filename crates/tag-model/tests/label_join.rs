//! Join and SKU properties over arbitrary rows.

use proptest::prelude::*;

use tag_model::{CatalogEntry, DEFAULT_PLACEHOLDER_NAME, LabelView, RowRecord};

fn field() -> impl Strategy<Value = String> {
    "[ A-Za-z0-9_./-]{0,12}"
}

proptest! {
    #[test]
    fn sku_is_verbatim_concatenation(style in field(), size in field(), color in field()) {
        let row = RowRecord::new(style.clone(), size.clone(), color.clone(), "ORD");
        let view = LabelView::join(&row, &[], DEFAULT_PLACEHOLDER_NAME);
        prop_assert_eq!(view.sku, format!("{style}-{color}-{size}"));
    }

    #[test]
    fn numeric_style_numbers_match_their_code(code in 0i64..100_000) {
        let catalog = vec![CatalogEntry::new(code, "Matched", 499.0)];
        let row = RowRecord::new(code.to_string(), "M", "Red", "ORD");
        let view = LabelView::join(&row, &catalog, DEFAULT_PLACEHOLDER_NAME);
        prop_assert_eq!(view.product_name.as_str(), "Matched");
        prop_assert_eq!(view.price.as_str(), "499");
    }

    #[test]
    fn alphabetic_style_numbers_never_match(style in "[A-Za-z]{1,8}") {
        let catalog = vec![CatalogEntry::new(0, "Zero", 10.0), CatalogEntry::new(1, "One", 20.0)];
        let row = RowRecord::new(style, "M", "Red", "ORD");
        let view = LabelView::join(&row, &catalog, DEFAULT_PLACEHOLDER_NAME);
        prop_assert!(view.matched.is_none());
        prop_assert_eq!(view.price.as_str(), "NA");
    }
}

#[test]
fn label_view_serializes_for_previews() {
    let row = RowRecord::new("QRV1", "M", "Red", "ORD1001");
    let catalog = [CatalogEntry::new(1, "Kurta", 999.0)];
    let view = LabelView::join(&row, &catalog, DEFAULT_PLACEHOLDER_NAME);
    insta::assert_json_snapshot!(view, @r#"
    {
      "row": {
        "style_number": "QRV1",
        "size": "M",
        "color": "Red",
        "order_id": "ORD1001"
      },
      "matched": null,
      "product_name": "Qurvii Product",
      "price": "NA",
      "sku": "QRV1-Red-M"
    }
    "#);
}
