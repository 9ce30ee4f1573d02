//! Main entry point for the `rtab` CLI application.
//!
//! `rtab` renders a stream of JSON records as a table, per-record cards,
//! or pretty-printed JSON, piping long output through an external pager.
//! Records arrive as JSON-lines (or concatenated JSON values) from a file
//! or stdin and are rendered in batches, so output starts flowing before
//! the source is exhausted.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Cli`] struct
//! - Opens the input source and wraps it as a lazy record stream
//! - Resolves the output format and pager, then delegates to
//!   [`rtab::paginate::print_paged`]
//!
//! # Flags of Interest
//! - `--output table|json|card`: Select the renderer
//! - `--fields A,B.C`: Restrict and order the displayed columns
//! - `--limit N`: Stop after N records
//! - `--follow`: Flush each record as it arrives (works with `tail -f`)
//! - `--pager PROGRAM` / `--no-pager`: Control external paging

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use rtab::cli::Cli;
use rtab::output::{resolve_output, PrintOptions};
use rtab::pager::{suggest_pager, Pager};
use rtab::paginate::print_paged;
use rtab::record::Record;

/// Opens the record source: a file path, or stdin for "-".
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        let file = File::open(path)
            .with_context(|| format!("cannot open input file: {}", path.display()))?;
        Ok(Box::new(file))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opts = PrintOptions {
        no_header: cli.no_header,
        separator: cli.separator.clone(),
        time_format: cli.time_format,
        ..PrintOptions::default()
    };

    let input = open_input(&cli.input)?;
    let reader = BufReader::new(input);

    // A lazy stream of JSON values: JSON-lines and concatenated JSON both
    // parse; each value becomes one record
    let source = serde_json::Deserializer::from_reader(reader)
        .into_iter::<serde_json::Value>()
        .map(|item| {
            item.map(Record::new)
                .map_err(|e| anyhow::Error::new(e).context("malformed JSON record in input"))
        });

    let output = resolve_output(&cli.flags, &opts);
    let mut pager = Pager::new(&cli.flags, &opts, suggest_pager(output));

    print_paged(&mut pager, source, &cli.flags, &opts)?;
    pager.close()?;

    Ok(())
}
