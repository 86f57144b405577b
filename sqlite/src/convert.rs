//! Conversion from SQLite rows to plan types.

use bible_plan_core::PlanRow;
use rusqlite::Row;
use rusqlite::types::Value;

use crate::error::{Result, SqliteError};

/// Converts a stored `info` value to JSON, keeping its storage class.
///
/// Text, integer, real and null map to the matching JSON types. Blobs and
/// non-finite reals have no JSON form and are rejected.
pub(crate) fn value_to_json(name: &str, value: Value) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Integer(i) => Ok(serde_json::Value::from(i)),
        Value::Real(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| {
                SqliteError::ConversionError(format!("info '{name}' holds non-finite number {f}"))
            }),
        Value::Text(s) => Ok(serde_json::Value::String(s)),
        Value::Blob(bytes) => Err(SqliteError::ConversionError(format!(
            "info '{name}' holds a {}-byte blob",
            bytes.len()
        ))),
    }
}

/// Converts a stored `info` name to a map key.
///
/// Integers and reals use their decimal form, with `.0` kept on whole reals;
/// NULL becomes `"null"`. Blob names are rejected.
pub(crate) fn value_to_key(name: Value) -> Result<String> {
    match name {
        Value::Null => Ok("null".to_string()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Real(f) if f.is_finite() && f.fract() == 0.0 => Ok(format!("{f:.1}")),
        Value::Real(f) => Ok(f.to_string()),
        Value::Text(s) => Ok(s),
        Value::Blob(bytes) => Err(SqliteError::ConversionError(format!(
            "info name is a {}-byte blob",
            bytes.len()
        ))),
    }
}

/// Reads one `reading_plan` row selected in `PLAN_COLUMNS` order.
///
/// `day` must be an integer since rows are grouped on it. A NULL `evening`
/// is read as 0; the remaining columns may be NULL.
pub(crate) fn row_to_plan_row(row: &Row<'_>) -> rusqlite::Result<PlanRow> {
    Ok(PlanRow {
        day: row.get(0)?,
        evening: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
        item: row.get(2)?,
        book_number: row.get(3)?,
        start_chapter: row.get(4)?,
        start_verse: row.get(5)?,
        end_chapter: row.get(6)?,
        end_verse: row.get(7)?,
    })
}
