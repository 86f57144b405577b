//! JSON rendering for the generated data files.
//!
//! Output uses two-space indentation and keeps non-ASCII characters as they
//! are, so Cyrillic book names stay readable in the written files.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Renders a value as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes a value as indented UTF-8 JSON to `path`, replacing any existing
/// file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let json = to_json_pretty(value)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
