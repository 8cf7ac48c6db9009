//! Formatting utilities used when filling the sheet.

/// Print an hour amount the way it is written on the sheet: whole values
/// without decimals (`3`), others with at most two decimals (`1.5`).
pub fn format_hours(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
