//! CLI interface definitions for the `rtab` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`OutputFlags`]: the user-override flags the rendering engine reads
//!   (output format, field selection, limit, follow mode, pager choice)
//! - [`Cli`]: the binary's argument parser, which embeds `OutputFlags`
//!
//! `OutputFlags` is a plain `clap::Args` block so a host CLI can flatten
//! it into its own command tree; the engine only ever reads these values,
//! it never writes them.
//!
//! # Example
//!
//! ```bash
//! rtab records.jsonl --output table --fields Name,Status --limit 50
//! tail -f events.jsonl | rtab --follow --no-pager
//! ```

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::format::TimeFormat;

/// User overrides consumed by the rendering engine.
///
/// Every field is optional; unset flags defer to the caller-supplied
/// [`PrintOptions`](crate::output::PrintOptions). The `output` value is
/// deliberately a free-form string: an unrecognized format name renders
/// nothing instead of failing argument parsing mid-session.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputFlags {
    /// Output format: table, json or card
    #[arg(long, short = 'o', value_name = "FORMAT")]
    pub output: Option<String>,

    /// Comma-separated field paths to display, or "long" to include the
    /// extended column set
    #[arg(long, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Render at most N records, then stop reading the source
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Flush each record as soon as it arrives instead of batching
    #[arg(long, default_value_t = false)]
    pub follow: bool,

    /// Pager program to pipe output through (e.g. less, more)
    #[arg(long, value_name = "PROGRAM")]
    pub pager: Option<String>,

    /// Write directly to stdout, never spawn a pager
    #[arg(long, default_value_t = false)]
    pub no_pager: bool,
}

/// Command-line arguments for the `rtab` record viewer.
///
/// Reads a stream of JSON values (JSON-lines or concatenated JSON) and
/// renders them through the pagination engine.
#[derive(Parser, Debug)]
#[command(name = "rtab", version, about)]
pub struct Cli {
    /// Input file of JSON records ("-" reads stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub flags: OutputFlags,

    /// How RFC3339 timestamp values are displayed
    #[arg(long, value_enum, default_value_t = TimeFormat::Raw)]
    pub time_format: TimeFormat,

    /// Column separator for table and card output
    #[arg(long, default_value = "  ")]
    pub separator: String,

    /// Suppress the table header line
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}
