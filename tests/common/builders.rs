//! Test builders — ergonomic constructors for sheet grids and documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use postroll_core::{Cell, Grid, PRIMARY_SHEET, SECONDARY_SHEET};

use super::fake_workbook::FakeWorkbook;

// ---------------------------------------------------------------------------
// Row constructors
// ---------------------------------------------------------------------------

/// Two-cell primary-sheet row with a textual value.
pub fn pair(label: &str, value: &str) -> Vec<Cell> {
    vec![Cell::Text(label.to_string()), Cell::Text(value.to_string())]
}

/// Two-cell primary-sheet row with a numeric value, as calamine decodes
/// number cells.
pub fn pair_num(label: &str, value: f64) -> Vec<Cell> {
    vec![Cell::Text(label.to_string()), Cell::Number(value)]
}

/// Three-cell secondary-sheet row.
pub fn triple(start: &str, end: &str, value: f64) -> Vec<Cell> {
    vec![
        Cell::Text(start.to_string()),
        Cell::Text(end.to_string()),
        Cell::Number(value),
    ]
}

// ---------------------------------------------------------------------------
// DocumentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a fake source document.
///
/// # Example
///
/// ```rust
/// let mut doc = DocumentBuilder::new()
///     .performance_row("Post date", "2024-03-10")
///     .performance_row("Impressions", "100")
///     .company_size("1-10 employees", 42.0)
///     .build();
/// ```
#[derive(Default)]
pub struct DocumentBuilder {
    performance: Option<Grid>,
    demographics: Option<Grid>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label/value row to the PERFORMANCE sheet (creating it).
    pub fn performance_row(mut self, label: &str, value: &str) -> Self {
        self.performance
            .get_or_insert_with(Vec::new)
            .push(pair(label, value));
        self
    }

    /// Append a raw row to the PERFORMANCE sheet (creating it).
    pub fn performance_raw(mut self, row: Vec<Cell>) -> Self {
        self.performance.get_or_insert_with(Vec::new).push(row);
        self
    }

    /// Append a company-size row to the TOP DEMOGRAPHICS sheet.
    pub fn company_size(mut self, range: &str, value: f64) -> Self {
        self.demographics
            .get_or_insert_with(Vec::new)
            .push(triple("Company size", range, value));
        self
    }

    /// Append a raw row to the TOP DEMOGRAPHICS sheet (creating it).
    pub fn demographics_raw(mut self, row: Vec<Cell>) -> Self {
        self.demographics.get_or_insert_with(Vec::new).push(row);
        self
    }

    pub fn build(self) -> FakeWorkbook {
        let mut workbook = FakeWorkbook::new();
        if let Some(grid) = self.performance {
            workbook.insert(PRIMARY_SHEET, grid);
        }
        if let Some(grid) = self.demographics {
            workbook.insert(SECONDARY_SHEET, grid);
        }
        workbook
    }
}

/// A document with the minimal valid primary sheet used by the end-to-end
/// scenarios: a post date and an impression count.
pub fn minimal_document(date: &str, impressions: &str) -> FakeWorkbook {
    DocumentBuilder::new()
        .performance_row("Post date", date)
        .performance_row("Impressions", impressions)
        .build()
}
