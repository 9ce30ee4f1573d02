//! Error types for the rendering and pagination engine.
//!
//! Rendering errors are typed so callers can tell a recoverable condition
//! (an empty record set) from a fatal one (a source read or encoding
//! failure). Pager *resolution* failure is deliberately not represented
//! here: a pager that cannot be found degrades to plain stdout and never
//! surfaces as an error.

use thiserror::Error;

/// Errors produced while extracting, rendering or paging records.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Field auto-discovery was requested against an empty record set,
    /// so there is no shape to introspect. Callers typically recover by
    /// rendering nothing.
    #[error("no records to display")]
    NoRecords,

    /// The record source failed mid-iteration. Output already flushed is
    /// retained; nothing is rolled back.
    #[error("record source failed: {0}")]
    SourceRead(#[source] anyhow::Error),

    /// A record could not be encoded as JSON.
    #[error("unable to encode record as JSON")]
    Encoding(#[from] serde_json::Error),

    /// Writing to the output sink failed, or the spawned pager exited
    /// abnormally after launch.
    #[error("pager process failed")]
    PagerProcess(#[from] std::io::Error),
}

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, OutputError>;
