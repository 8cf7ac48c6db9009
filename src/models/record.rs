use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Number of columns a data row must carry.
pub const RECORD_COLUMNS: usize = 5;

/// One visit: the columns are
/// 날짜, 시작 시간, 종료 시간, 장소, 내용
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based data row the record was read from (header not counted).
    pub row: usize,
    pub date: NaiveDate,
    pub start_hour: f64,
    pub end_hour: f64,
    pub location_code: String,
    pub detail: String,
}

impl Record {
    /// Build a record from one raw data row.
    ///
    /// `row` is the 1-based data row number (the header is not counted); it is
    /// kept on the record so later warnings point at the same line as errors.
    pub fn from_row<S: AsRef<str>>(row: usize, cells: &[S]) -> AppResult<Self> {
        if cells.len() < RECORD_COLUMNS {
            return Err(AppError::InvalidRecord {
                row,
                reason: format!(
                    "expected {} columns, found {}",
                    RECORD_COLUMNS,
                    cells.len()
                ),
            });
        }

        let raw_date = cells[0].as_ref().trim();
        let date = parse_date(raw_date).ok_or_else(|| AppError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;

        let start_hour = parse_hour(row, cells[1].as_ref())?;
        let end_hour = parse_hour(row, cells[2].as_ref())?;

        if end_hour <= start_hour {
            return Err(AppError::InvalidRecord {
                row,
                reason: format!(
                    "end hour {} is not after start hour {}",
                    cells[2].as_ref().trim(),
                    cells[1].as_ref().trim()
                ),
            });
        }

        Ok(Self {
            row,
            date,
            start_hour,
            end_hour,
            location_code: cells[3].as_ref().to_string(),
            detail: cells[4].as_ref().to_string(),
        })
    }

    /// Worked hours for this visit.
    pub fn work_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Known location for this visit, if the code matches one.
    pub fn location(&self) -> Option<Location> {
        Location::from_code(&self.location_code)
    }
}

fn parse_hour(row: usize, raw: &str) -> AppResult<f64> {
    let value = raw.trim();
    match value.parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 => Ok(h),
        _ => Err(AppError::InvalidHour {
            row,
            value: value.to_string(),
        }),
    }
}
