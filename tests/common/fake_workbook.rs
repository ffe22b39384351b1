//! In-memory [`SheetSource`] fake used by the harnesses in place of real
//! calamine-backed workbooks.

use postroll_core::{Grid, SheetSource, SourceError};
use std::collections::HashMap;

/// A fake document: named sheets backed by in-memory grids, with an
/// optional injected failure to simulate a corrupt file.
#[derive(Default)]
pub struct FakeWorkbook {
    sheets: HashMap<String, Grid>,
    failure: Option<String>,
}

impl FakeWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, grid: Grid) {
        self.sheets.insert(name.to_string(), grid);
    }

    /// A document whose every sheet access fails.
    pub fn corrupt(reason: &str) -> Self {
        Self {
            sheets: HashMap::new(),
            failure: Some(reason.to_string()),
        }
    }
}

impl SheetSource for FakeWorkbook {
    fn sheet(&mut self, name: &str) -> Result<Option<Grid>, SourceError> {
        if let Some(reason) = &self.failure {
            return Err(SourceError::Unreadable(reason.clone()));
        }
        Ok(self.sheets.get(name).cloned())
    }
}
