//! Columnar table renderer.
//!
//! Each batch computes its own column widths from the header (when shown)
//! and every cell in the batch, pads cells to the column width and joins
//! them with the configured separator. The final column is left unpadded
//! so rows carry no trailing whitespace.

use std::io::Write;

use crate::error::Result;
use crate::fields::{field_names, field_values, FIELDS_DEPTH};
use crate::record::Record;

use super::{PrintOptions, RenderSession};

/// Renders a batch of records as aligned columns.
///
/// The header line is written once per [`RenderSession`] unless the
/// options suppress it entirely; the session records that it has been
/// shown so a multi-batch stream renders as one continuous table. Column
/// order is the field resolution order, row order is input order.
pub fn render(
    w: &mut dyn Write,
    records: &[Record],
    opts: &PrintOptions,
    session: &mut RenderSession,
) -> Result<()> {
    let names = field_names(records, &opts.fields, FIELDS_DEPTH)?;
    let rows = field_values(records, &names, opts.time_format);

    let show_header = !opts.no_header && !session.header_shown;

    let mut widths: Vec<usize> = vec![0; names.len()];
    if show_header {
        for (i, name) in names.iter().enumerate() {
            widths[i] = name.chars().count();
        }
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    if show_header {
        let header: Vec<&str> = names.iter().map(String::as_str).collect();
        write_row(w, &header, &widths, &opts.separator)?;
        session.header_shown = true;
    }

    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(w, &cells, &widths, &opts.separator)?;
    }

    Ok(())
}

/// Writes one row, padding every cell but the last to its column width.
fn write_row(w: &mut dyn Write, cells: &[&str], widths: &[usize], separator: &str) -> Result<()> {
    let mut line = String::new();
    let last = cells.len().saturating_sub(1);

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(separator);
        }
        line.push_str(cell);
        if i < last {
            let pad = widths[i].saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }

    // An empty final cell would otherwise leave a dangling separator
    writeln!(w, "{}", line.trim_end())?;
    Ok(())
}
