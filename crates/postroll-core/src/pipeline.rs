//! Per-document pipeline: two sheet passes over a decoded workbook,
//! producing one canonical [`Record`].
//!
//! The pipeline never touches the filesystem; documents arrive through the
//! [`SheetSource`] trait, implemented by `postroll-io` for real workbooks
//! and by test fakes elsewhere.

use crate::demographic;
use crate::normalize::{clean_label, is_valid_row, normalize_value};
use crate::reconcile::Reconciler;
use crate::record::{Draft, Record};

/// Sheet holding scalar performance metrics as label/value rows.
pub const PRIMARY_SHEET: &str = "PERFORMANCE";
/// Sheet holding audience-size breakdowns as compound-label rows.
pub const SECONDARY_SHEET: &str = "TOP DEMOGRAPHICS";

/// A decoded spreadsheet cell, as handed over by the workbook
/// collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Raw textual content: numbers via `f64` display, booleans
    /// lowercased, empty cells as `""`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

/// One decoded sheet: rows of cells.
pub type Grid = Vec<Vec<Cell>>;

/// Failure reported by the workbook collaborator. Any error skips the
/// whole document; a missing sheet is represented as `Ok(None)` instead.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The document could not be opened or decoded at all.
    #[error("unreadable document: {0}")]
    Unreadable(String),
    /// A sheet exists but its cell grid could not be read.
    #[error("unreadable sheet {name:?}: {reason}")]
    Sheet { name: String, reason: String },
}

/// Named-sheet access to one decoded source document.
pub trait SheetSource {
    /// The cell grid for `name`, or `None` if the document has no such
    /// sheet.
    fn sheet(&mut self, name: &str) -> Result<Option<Grid>, SourceError>;
}

/// Run both sheet passes over one document and finalize the record.
///
/// An error from the source aborts the whole document — no partial record
/// is ever produced; the caller decides whether the batch continues.
pub fn consolidate<S: SheetSource>(source: &mut S) -> Result<Record, SourceError> {
    let mut draft = Draft::new();

    if let Some(grid) = source.sheet(PRIMARY_SHEET)? {
        let mut reconciler = Reconciler::new();
        for row in &grid {
            // (label, value) from the two leading cells; extras ignored.
            let label = clean_label(&cell_text(row, 0));
            let value = normalize_value(&cell_text(row, 1));
            if !is_valid_row(&label, &value) {
                continue;
            }
            reconciler.apply(&mut draft, &label, value);
        }
    }

    if let Some(grid) = source.sheet(SECONDARY_SHEET)? {
        for row in &grid {
            // (label-part-1, label-part-2, value) from the three leading
            // cells; extras ignored.
            let start = clean_label(&cell_text(row, 0));
            let end = cell_text(row, 1);
            let value = normalize_value(&cell_text(row, 2));
            demographic::apply(&mut draft, &start, &end, value);
        }
    }

    Ok(draft.finalize())
}

fn cell_text(row: &[Cell], index: usize) -> String {
    row.get(index).map(Cell::to_text).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
