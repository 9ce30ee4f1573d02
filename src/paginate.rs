//! The pagination loop: drives a lazy record source through the renderers.
//!
//! Records are pulled one at a time and assembled into bounded batches so
//! columnar output stays aligned, then flushed to the sink. Follow mode
//! short-circuits batching and flushes every record as it arrives. An
//! optional limit is a hard stop: once it is reached the source is never
//! pulled again.

use std::io::Write;

use crate::cli::OutputFlags;
use crate::error::{OutputError, Result};
use crate::output::{apply_field_flags, print_batch, resolve_output, PrintOptions, RenderSession};
use crate::record::Record;

/// Batch size for consistent columnar formatting.
pub const BATCH_PRINT_SIZE: usize = 100;

/// Renders a lazy record source, batching and limiting as configured.
///
/// The source yields `Result<Record>` items; the first failed pull aborts
/// the session with [`OutputError::SourceRead`]. Output already flushed is
/// retained; there is no rollback of rendered batches.
///
/// Flush points:
/// - follow mode: every record, with the sink flushed each time
/// - a batch reaches [`BATCH_PRINT_SIZE`]
/// - the limit is reached (the final, possibly partial batch)
/// - the source is exhausted (the remainder)
///
/// The header is rendered only on the first flush of the session, so a
/// multi-batch stream reads as one continuous table.
pub fn print_paged<I>(
    w: &mut dyn Write,
    source: I,
    flags: &OutputFlags,
    opts: &PrintOptions,
) -> Result<()>
where
    I: IntoIterator<Item = anyhow::Result<Record>>,
{
    let opts = apply_field_flags(flags, opts);
    let output = resolve_output(flags, &opts);

    let mut session = RenderSession::new();
    let mut batch: Vec<Record> = Vec::new();
    let mut printed = 0usize;
    let mut source = source.into_iter();

    loop {
        // The limit is checked before pulling: after the N-th record the
        // source is never advanced again
        if flags.limit.is_some_and(|limit| printed >= limit) {
            break;
        }
        let Some(item) = source.next() else {
            break;
        };
        let record = item.map_err(OutputError::SourceRead)?;

        batch.push(record);
        printed += 1;

        let limit_reached = flags.limit.is_some_and(|limit| printed == limit);
        if flags.follow || batch.len() == BATCH_PRINT_SIZE || limit_reached {
            print_batch(w, &batch, &opts, output, &mut session)?;
            batch.clear();
            if flags.follow {
                w.flush()?;
            }
        }
    }

    if !batch.is_empty() {
        print_batch(w, &batch, &opts, output, &mut session)?;
    }
    w.flush()?;

    Ok(())
}
