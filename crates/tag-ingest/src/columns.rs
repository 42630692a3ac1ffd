//! Header-to-field mapping for the cutting list.

use csv::StringRecord;
use tracing::warn;

use tag_model::RowRecord;

pub const STYLE_NUMBER_COLUMN: &str = "Style Number";
pub const SIZE_COLUMN: &str = "Size";
pub const COLOR_COLUMN: &str = "Color";
pub const ORDER_ID_COLUMN: &str = "(Do not touch) Order Id";

/// Positions of the four extracted columns within a header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub style_number: Option<usize>,
    pub size: Option<usize>,
    pub color: Option<usize>,
    pub order_id: Option<usize>,
}

impl ColumnLayout {
    /// Locate the expected columns. Names are compared after trimming
    /// whitespace and a leading byte-order mark; the first occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == name)
        };
        Self {
            style_number: position(STYLE_NUMBER_COLUMN),
            size: position(SIZE_COLUMN),
            color: position(COLOR_COLUMN),
            order_id: position(ORDER_ID_COLUMN),
        }
    }

    /// Names of expected columns that are absent from the header.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        [
            (self.style_number, STYLE_NUMBER_COLUMN),
            (self.size, SIZE_COLUMN),
            (self.color, COLOR_COLUMN),
            (self.order_id, ORDER_ID_COLUMN),
        ]
        .into_iter()
        .filter(|(index, _)| index.is_none())
        .map(|(_, name)| name)
        .collect()
    }

    pub fn warn_missing(&self) {
        let missing = self.missing_columns();
        if !missing.is_empty() {
            warn!(
                missing = ?missing,
                "cutting list is missing expected columns, their fields will be empty"
            );
        }
    }

    /// Extract one row. Absent columns and short records give empty strings.
    pub fn extract(&self, record: &StringRecord) -> RowRecord {
        let field = |index: Option<usize>| {
            index
                .and_then(|index| record.get(index))
                .unwrap_or_default()
                .to_string()
        };
        RowRecord {
            style_number: field(self.style_number),
            size: field(self.size),
            color: field(self.color),
            order_id: field(self.order_id),
        }
    }
}

fn normalize_header(value: &str) -> &str {
    value.trim_start_matches('\u{feff}').trim()
}
