//! postroll-io — external collaborators for the postroll pipeline.
//!
//! Decodes `.xlsx` workbooks behind [`postroll_core::SheetSource`] and
//! projects finalized records to CSV. No decision logic lives here.

pub mod csv_out;
pub mod workbook;

pub use csv_out::{write_csv, write_csv_file, WriteError};
pub use workbook::XlsxWorkbook;
