//! Per-record card renderer.
//!
//! Each record renders as a vertical two-column (Name, Value) mini-table
//! with the header suppressed, followed by a separator line. Blocks are
//! self-delimiting, so a human or a downstream parser can split the
//! output deterministically.

use serde_json::{json, Value};
use std::io::Write;

use crate::error::Result;
use crate::fields::{field_names, field_values, FIELDS_DEPTH};
use crate::record::Record;

use super::{table, PrintOptions, RenderSession};

/// Number of separator repetitions in the line between cards.
const CARD_SEPARATOR_REPEAT: usize = 10;

/// Renders each record in the batch as its own Name/Value card.
pub fn render(w: &mut dyn Write, records: &[Record], opts: &PrintOptions) -> Result<()> {
    let names = field_names(records, &opts.fields, FIELDS_DEPTH)?;
    let rows = field_values(records, &names, opts.time_format);

    // Each card is itself a small table keyed Name/Value
    let card_opts = PrintOptions {
        fields: vec!["Name".to_string(), "Value".to_string()],
        no_header: true,
        separator: opts.separator.clone(),
        ..PrintOptions::default()
    };

    for row in rows {
        let card_rows: Vec<Record> = names
            .iter()
            .zip(row)
            .map(|(name, value)| {
                Record::new(json!({
                    "Name": Value::String(name.clone()),
                    "Value": Value::String(value),
                }))
            })
            .collect();

        table::render(w, &card_rows, &card_opts, &mut RenderSession::new())?;
        writeln!(w, "{}", opts.separator.repeat(CARD_SEPARATOR_REPEAT).trim_end())?;
    }

    Ok(())
}
