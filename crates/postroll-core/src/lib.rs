//! postroll-core — canonical schema and normalization pipeline.
//!
//! Consolidates loosely-labeled spreadsheet analytics exports into a fixed
//! 21-field canonical record, one per source document.
//!
//! # Architecture
//!
//! ```text
//! SheetSource ──► normalize + reconcile   (PERFORMANCE sheet)
//!             ──► normalize + demographic (TOP DEMOGRAPHICS sheet)
//!             ──► Draft::finalize ──► Record ──► sort_by_recency
//! ```
//!
//! Everything here is synchronous and I/O-free. Decoding real workbooks
//! and writing output live in `postroll-io`; the binary orchestrates the
//! batch.

pub mod config;
pub mod demographic;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod record;
pub mod schema;

pub use pipeline::{
    consolidate, Cell, Grid, SheetSource, SourceError, PRIMARY_SHEET, SECONDARY_SHEET,
};
pub use record::{sort_by_recency, Draft, Record};
pub use schema::{Field, FieldValue};
