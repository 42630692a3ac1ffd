use serde::{Deserialize, Serialize};

/// One line of the cutting list: a single physical piece to tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub style_number: String,
    pub size: String,
    pub color: String,
    pub order_id: String,
}

impl RowRecord {
    pub fn new(
        style_number: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            style_number: style_number.into(),
            size: size.into(),
            color: color.into(),
            order_id: order_id.into(),
        }
    }

    /// `style-color-size`, using the raw field values.
    pub fn sku(&self) -> String {
        format!("{}-{}-{}", self.style_number, self.color, self.size)
    }
}
