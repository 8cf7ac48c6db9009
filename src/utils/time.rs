//! Time utilities: decimal hour values → HH:MM.

/// Format a decimal hour value as `HH:MM`.
///
/// The fractional part is read as a fraction of an hour, so `9.5` is
/// `09:30` and `17.0` is `17:00`. Minutes are rounded to the nearest one.
pub fn format_hour_hhmm(value: f64) -> String {
    let mut hours = value.floor() as i64;
    let mut minutes = ((value - value.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }
    format!("{:02}:{:02}", hours, minutes)
}
