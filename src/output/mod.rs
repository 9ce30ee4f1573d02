//! Modular output system: renderers, options and format selection.
//!
//! This module is the hub the pagination loop drives. It owns:
//!
//! - [`PrintOptions`]: the per-call rendering configuration
//! - [`OutputOption`]: the closed set of output formats (table/json/card)
//! - [`RenderSession`]: the one piece of cross-batch state (whether the
//!   header has been shown)
//! - format selection and user-flag overrides, and the dispatch of a
//!   batch to the matching renderer
//!
//! # Available Renderers
//!
//! - **Table**: aligned columns, header once per stream
//! - **Card**: one Name/Value block per record
//! - **JSON**: pretty-printed JSON array per batch

pub mod card;
pub mod json;
pub mod table;

use std::io::Write;

use crate::cli::OutputFlags;
use crate::error::Result;
use crate::format::TimeFormat;
use crate::record::Record;

/// The `--fields` value that activates the long column set.
pub const FIELDS_LONG: &str = "long";

/// Output format for a render call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputOption {
    Table,
    Json,
    Card,
}

impl OutputOption {
    /// Matches a format name. Anything outside `table|json|card` yields
    /// `None`, which renders nothing; a typo must never abort an
    /// interactive session.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "table" => Some(OutputOption::Table),
            "json" => Some(OutputOption::Json),
            "card" => Some(OutputOption::Card),
            _ => None,
        }
    }
}

/// Rendering configuration for one render call.
///
/// # Fields
/// * `fields` - Primary column paths, insertion order = column order
/// * `fields_long` - Additional columns activated by `--fields long`
/// * `ignore_flags` - Ignore user flag overrides entirely
/// * `output` - Default output format when the user supplies none
/// * `pager` - Default pager program when the user names none
/// * `no_pager` - Never spawn a pager for this call
/// * `no_header` - Suppress the header line unconditionally
/// * `separator` - Column separator (default: two spaces)
/// * `time_format` - Display policy for timestamp-shaped strings
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub fields: Vec<String>,
    pub fields_long: Vec<String>,
    pub ignore_flags: bool,
    pub output: Option<OutputOption>,
    pub pager: Option<String>,
    pub no_pager: bool,
    pub no_header: bool,
    pub separator: String,
    pub time_format: TimeFormat,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            fields: Vec::new(),
            fields_long: Vec::new(),
            ignore_flags: false,
            output: None,
            pager: None,
            no_pager: false,
            no_header: false,
            separator: "  ".to_string(),
            time_format: TimeFormat::Raw,
        }
    }
}

/// Cross-batch render state, threaded explicitly through each batch call.
///
/// A multi-batch stream must render as one continuous table, so only the
/// first flush prints the header. Holding that bit here keeps the options
/// immutable for the whole session.
#[derive(Debug, Default)]
pub struct RenderSession {
    pub header_shown: bool,
}

impl RenderSession {
    pub fn new() -> Self {
        RenderSession::default()
    }
}

/// Resolves the output format from user flags and option defaults.
///
/// An explicitly set user selection always wins unless `ignore_flags`;
/// otherwise the options default applies; otherwise Table. An unknown
/// explicit name resolves to `None` (render nothing).
pub fn resolve_output(flags: &OutputFlags, opts: &PrintOptions) -> Option<OutputOption> {
    match &flags.output {
        Some(name) if !opts.ignore_flags => OutputOption::from_name(name),
        _ => Some(opts.output.unwrap_or(OutputOption::Table)),
    }
}

/// Applies the user's `--fields` override to the configured field sets.
///
/// `--fields long` appends the long column set to the primary one; any
/// other value is a comma-separated list that replaces the primary set,
/// with surrounding whitespace trimmed. Ignored when `ignore_flags` is
/// set, so callers can pin their own column layout.
pub fn apply_field_flags(flags: &OutputFlags, opts: &PrintOptions) -> PrintOptions {
    let mut resolved = opts.clone();

    if opts.ignore_flags {
        return resolved;
    }

    if let Some(fields) = &flags.fields {
        if fields == FIELDS_LONG {
            let long = std::mem::take(&mut resolved.fields_long);
            resolved.fields.extend(long);
        } else {
            resolved.fields = fields.split(',').map(|f| f.trim().to_string()).collect();
            resolved.fields_long.clear();
        }
    }

    resolved
}

/// Renders one batch with the already-resolved format and field sets.
///
/// `output = None` (an unrecognized format name) renders nothing.
pub fn print_batch(
    w: &mut dyn Write,
    records: &[Record],
    opts: &PrintOptions,
    output: Option<OutputOption>,
    session: &mut RenderSession,
) -> Result<()> {
    match output {
        Some(OutputOption::Table) => table::render(w, records, opts, session),
        Some(OutputOption::Json) => json::render(w, records),
        Some(OutputOption::Card) => card::render(w, records, opts),
        None => Ok(()),
    }
}

/// One-shot convenience: renders a bounded record set in a single call,
/// resolving format and field overrides from `flags`.
pub fn print_items(
    w: &mut dyn Write,
    records: &[Record],
    flags: &OutputFlags,
    opts: &PrintOptions,
) -> Result<()> {
    let resolved = apply_field_flags(flags, opts);
    let output = resolve_output(flags, opts);
    print_batch(w, records, &resolved, output, &mut RenderSession::new())
}
