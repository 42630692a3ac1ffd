//! Lenient decoding of the catalog JSON.

use serde_json::Value;
use tracing::debug;

use tag_model::CatalogEntry;

use crate::error::{CatalogError, Result};

/// Decode a JSON array of product objects.
///
/// The body must be an array. Individual objects without a numeric, integral
/// `style_code` are skipped; a missing `style_name` or `mrp` decodes to an
/// empty name or a zero price.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<CatalogEntry>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::Decode(format!(
                "expected a JSON array, found {}",
                kind_of(&other)
            )));
        }
    };

    let total = items.len();
    let entries: Vec<CatalogEntry> = items.iter().filter_map(entry_from_value).collect();
    if entries.len() < total {
        debug!(
            skipped = total - entries.len(),
            "catalog entries without a usable style_code were skipped"
        );
    }
    Ok(entries)
}

fn entry_from_value(value: &Value) -> Option<CatalogEntry> {
    let object = value.as_object()?;
    let style_code = integral(object.get("style_code")?)?;
    let style_name = match object.get("style_name") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    };
    let mrp = object.get("mrp").and_then(Value::as_f64).unwrap_or(0.0);
    Some(CatalogEntry {
        style_code,
        style_name,
        mrp,
    })
}

fn integral(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    let code = value.as_f64()?;
    (code.fract() == 0.0 && code.abs() < i64::MAX as f64).then_some(code as i64)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
