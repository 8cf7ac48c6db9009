use chrono::{Datelike, NaiveDate};

/// Weekday names, Monday first (chrono's `num_days_from_monday` order).
pub const WEEKDAYS_KO: [&str; 7] = [
    "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn weekday_ko(date: NaiveDate) -> &'static str {
    WEEKDAYS_KO[date.weekday().num_days_from_monday() as usize]
}

/// `2025-05-03` → `5월 3일` (no zero padding)
pub fn month_day_ko(date: NaiveDate) -> String {
    format!("{}월 {}일", date.month(), date.day())
}
