//! CSV output — mechanical projection of finalized records to a tabular
//! file: header row of canonical field names, one data row per record.

use postroll_core::{Field, Record};
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Failure while writing the consolidated table.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Write the canonical header plus one row per record. Numbers render via
/// `f64` display (`100`, not `100.0`); null renders as an empty cell.
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<(), WriteError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(Field::ORDER.iter().map(|f| f.name()))?;
    for record in records {
        out.write_record(record.iter().map(|(_, value)| value.to_cell_string()))?;
    }
    out.flush()?;
    Ok(())
}

/// Write to `path`, creating parent directories as needed.
pub fn write_csv_file(path: &Path, records: &[Record]) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_csv(fs::File::create(path)?, records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
