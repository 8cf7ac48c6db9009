// src/source/excel_date.rs

use chrono::{Duration, NaiveDate};

fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Calendar date of an Excel serial (the time part is dropped).
pub(crate) fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    excel_epoch()?.checked_add_signed(Duration::try_days(serial.floor() as i64)?)
}

/// Time part of an Excel serial as decimal hours (`0.395833` → `9.5`).
pub(crate) fn excel_serial_to_hours(serial: f64) -> f64 {
    let hours = (serial - serial.floor()) * 24.0;
    // 1/60 of an hour is the finest the sheet cares about
    (hours * 60.0).round() / 60.0
}
