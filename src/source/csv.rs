use crate::errors::{AppError, AppResult};
use crate::source::RecordSource;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

/// Rows from a CSV file (comma separated, UTF-8).
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for CsvSource {
    fn fetch_rows(&self) -> AppResult<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("data source not found: {}", self.path.display()),
            )));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            rows.push(rec.iter().map(str::to_string).collect::<Vec<_>>());
        }

        // Spreadsheet exports often start with a BOM
        if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }

        Ok(rows)
    }
}
