//! Data source adapters.
//!
//! Every adapter returns the raw sheet rows (header included); turning them
//! into [`Record`]s is shared so that CSV files, workbooks and in-memory rows
//! all follow the same rules:
//!
//! - row 0 is the header and is discarded (it must have at least 5 columns),
//! - rows whose cells are all blank are skipped,
//! - any malformed date/hour value aborts the whole load.

mod csv;
mod excel_date;
mod memory;
mod workbook;

pub use self::csv::CsvSource;
pub use memory::MemorySource;
pub use workbook::WorkbookSource;

use crate::errors::{AppError, AppResult};
use crate::models::record::{RECORD_COLUMNS, Record};
use std::path::Path;

pub trait RecordSource {
    /// All rows of the sheet, header included, as strings.
    fn fetch_rows(&self) -> AppResult<Vec<Vec<String>>>;

    /// Ordered visit records, header removed.
    fn fetch_records(&self) -> AppResult<Vec<Record>> {
        records_from_rows(self.fetch_rows()?)
    }
}

/// Turn raw rows (header first) into records.
pub fn records_from_rows(rows: Vec<Vec<String>>) -> AppResult<Vec<Record>> {
    let mut rows = rows.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| AppError::InvalidHeader("the source has no rows".into()))?;
    if header.len() < RECORD_COLUMNS {
        return Err(AppError::InvalidHeader(format!(
            "expected at least {} columns, found {}",
            RECORD_COLUMNS,
            header.len()
        )));
    }

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        records.push(Record::from_row(idx + 1, &row)?);
    }
    Ok(records)
}

/// Pick an adapter from the file extension.
pub fn open_source(path: &Path, sheet: &str) -> AppResult<Box<dyn RecordSource>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(Box::new(CsvSource::new(path))),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Box::new(WorkbookSource::new(path, sheet))),
        _ => Err(AppError::UnsupportedSource(path.display().to_string())),
    }
}
