//! JSON output renderer.
//!
//! Batches render as one pretty-printed JSON array per call; single
//! values render as a pretty-printed object. Nested display cells use the
//! compact form from [`crate::format`] instead.

use serde::Serialize;
use std::io::Write;

use crate::error::{OutputError, Result};
use crate::record::Record;

/// Renders a batch of records as one 2-space-indented JSON array.
///
/// # Errors
/// A marshal failure is fatal to the render call and propagated as
/// [`OutputError::Encoding`]. Invalid data must surface, not be silently
/// dropped.
pub fn render(w: &mut dyn Write, records: &[Record]) -> Result<()> {
    let text = to_json(records, true)?;
    writeln!(w, "{}", text)?;
    Ok(())
}

/// Renders a single serializable value as a pretty-printed JSON object.
pub fn render_one<T: Serialize>(w: &mut dyn Write, value: &T) -> Result<()> {
    let text = to_json(value, true)?;
    writeln!(w, "{}", text)?;
    Ok(())
}

/// Marshals a value to JSON, indented with two spaces or compact.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: bool) -> Result<String> {
    let text = if indent {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(OutputError::Encoding)
}
