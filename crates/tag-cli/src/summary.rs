use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tag_model::{CatalogEntry, LabelView, MISSING_PRICE, format_price};

use crate::commands::GenerateOutcome;

pub fn print_generate_summary(outcome: &GenerateOutcome) {
    println!(
        "Wrote {} label page(s) to {}",
        outcome.pages,
        outcome.output_path.display()
    );
    if let Some(dir) = &outcome.preview_dir {
        println!("Previews: {}", dir.display());
    }
    if outcome.unmatched > 0 {
        println!(
            "{} row(s) had no catalog match and use placeholder values",
            outcome.unmatched
        );
    }
}

pub fn print_label_table(labels: &[LabelView]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Order Id"),
        header_cell("SKU"),
        header_cell("Product"),
        header_cell("MRP"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, label) in labels.iter().enumerate() {
        let product = if label.is_matched() {
            Cell::new(&label.product_name)
        } else {
            dim_cell(&label.product_name)
        };
        let price = if label.price == MISSING_PRICE {
            Cell::new(&label.price).fg(Color::Yellow)
        } else {
            Cell::new(&label.price)
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(label.order_id()),
            Cell::new(&label.sku),
            product,
            price,
        ]);
    }
    println!("{table}");
    println!("{} label(s)", labels.len());
}

pub fn print_catalog_table(entries: &[CatalogEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Style Code"),
        header_cell("Style Name"),
        header_cell("MRP"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in entries {
        let price = format_price(entry.mrp).map_or_else(|| dim_cell(MISSING_PRICE), Cell::new);
        table.add_row(vec![
            Cell::new(entry.style_code),
            Cell::new(&entry.style_name),
            price,
        ]);
    }
    println!("{table}");
    println!("{} product(s)", entries.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
