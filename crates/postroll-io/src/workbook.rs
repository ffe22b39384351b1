//! Workbook decoding — calamine-backed [`SheetSource`] implementation.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use postroll_core::{Cell, Grid, SheetSource, SourceError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One `.xlsx` document on disk, decoded sheet by sheet on demand.
pub struct XlsxWorkbook {
    inner: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Open and index a workbook. Failure here means the whole document is
    /// unreadable and will be skipped by the orchestrator.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let inner = open_workbook::<Xlsx<BufReader<File>>, _>(path)
            .map_err(|e| SourceError::Unreadable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl SheetSource for XlsxWorkbook {
    fn sheet(&mut self, name: &str) -> Result<Option<Grid>, SourceError> {
        if !self.inner.sheet_names().iter().any(|n| n.as_str() == name) {
            return Ok(None);
        }
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| SourceError::Sheet {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(to_grid(&range)))
    }
}

fn to_grid(range: &Range<Data>) -> Grid {
    range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Raw serial number, matching the raw-mode grids the reports were
        // originally consumed through.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
