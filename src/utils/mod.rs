pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::format_hours;
pub use time::format_hour_hhmm;
