use crate::errors::{AppError, AppResult};
use crate::source::RecordSource;
use crate::source::excel_date::{excel_serial_to_date, excel_serial_to_hours};
use crate::utils::format_hours;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};

/// Rows from one worksheet of a spreadsheet workbook (xlsx, xls, xlsb, ods).
pub struct WorkbookSource {
    path: PathBuf,
    sheet: String,
}

impl WorkbookSource {
    pub fn new(path: impl AsRef<Path>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: sheet.into(),
        }
    }
}

impl RecordSource for WorkbookSource {
    fn fetch_rows(&self) -> AppResult<Vec<Vec<String>>> {
        let mut workbook = open_workbook_auto(&self.path)?;

        if !workbook.sheet_names().iter().any(|n| n == &self.sheet) {
            return Err(AppError::Config(format!(
                "worksheet '{}' not found in {}",
                self.sheet,
                self.path.display()
            )));
        }

        let range = workbook.worksheet_range(&self.sheet)?;
        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }
}

/// Render a cell the way a sheet viewer would show it.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => {
            if v.fract() == 0.0 {
                format!("{}", *v as i64)
            } else {
                v.to_string()
            }
        }
        Data::Bool(v) => v.to_string(),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if serial < 1.0 {
                // time-only cell, e.g. a start hour typed as 09:30
                format_hours(excel_serial_to_hours(serial))
            } else {
                excel_serial_to_date(serial)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| serial.to_string())
            }
        }
        Data::DateTimeIso(s) => s.split('T').next().unwrap_or(s).to_string(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
