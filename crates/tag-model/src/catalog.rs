use serde::{Deserialize, Serialize};

/// A product record from the inventory catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub style_code: i64,
    #[serde(default)]
    pub style_name: String,
    /// Retail price. Zero means "not priced".
    #[serde(default)]
    pub mrp: f64,
}

impl CatalogEntry {
    pub fn new(style_code: i64, style_name: impl Into<String>, mrp: f64) -> Self {
        Self {
            style_code,
            style_name: style_name.into(),
            mrp,
        }
    }
}

/// Numeric interpretation of a CSV style number.
///
/// Surrounding whitespace is ignored and a blank value reads as `0`.
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix. Anything
/// else must be a finite, integral decimal number that fits an `i64`.
pub fn parse_style_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return i64::from_str_radix(digits, radix).ok();
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    // Rust accepts "inf"/"nan" spellings here, the finiteness check drops them.
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

fn split_radix_prefix(value: &str) -> Option<(u32, &str)> {
    let (prefix, digits) = value.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, digits))
}

/// First catalog entry whose style code equals the row's numeric style number.
pub fn find_entry<'a>(
    catalog: &'a [CatalogEntry],
    style_number: &str,
) -> Option<&'a CatalogEntry> {
    let code = parse_style_number(style_number)?;
    catalog.iter().find(|entry| entry.style_code == code)
}
