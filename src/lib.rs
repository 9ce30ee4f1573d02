//! Library crate for rtab
//!
//! This exposes the rendering and pagination engine for library usage.
//!
//! # Features
//!
//! - **Generic Records**: Any `Serialize` value renders through the same
//!   pipeline; field access is reflective and shape-tolerant
//! - **Modular Output System**: Table, card and JSON renderers behind one
//!   format-selection policy
//! - **Pagination Loop**: Batched rendering over lazy sources, with hard
//!   limits and per-record streaming in follow mode
//! - **External Paging**: Output optionally flows through `less`/`more`
//!   with orderly pipe and signal handling
//!
//! # Modules
//!
//! - [`record`]: The generic record abstraction
//! - [`fields`]: Field discovery and dotted-path extraction
//! - [`format`]: Display formatting for cell values
//! - [`output`]: Renderers, options and format selection
//! - [`paginate`]: The batching/limiting/streaming loop
//! - [`pager`]: External pager subprocess adapter
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: The engine's error taxonomy

pub mod cli;
pub mod error;
pub mod fields;
pub mod format;
pub mod output;
pub mod pager;
pub mod paginate;
pub mod record;

pub use cli::{Cli, OutputFlags};
pub use error::OutputError;
pub use format::TimeFormat;
pub use output::{print_items, OutputOption, PrintOptions, RenderSession};
pub use pager::Pager;
pub use paginate::{print_paged, BATCH_PRINT_SIZE};
pub use record::Record;
