use crate::models::record::Record;
use crate::utils::formatting::format_hours;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Totals printed in every page header. Always computed over the whole
/// record list, never per page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_visits: usize,
    pub total_days: usize,
    pub total_hours: f64,
    /// Distinct months, in order of first appearance.
    pub months: Vec<u32>,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut days: HashSet<NaiveDate> = HashSet::new();
        let mut months: Vec<u32> = Vec::new();
        let mut total_hours = 0.0;

        for r in records {
            days.insert(r.date);
            if !months.contains(&r.date.month()) {
                months.push(r.date.month());
            }
            total_hours += r.work_hours();
        }

        Self {
            total_visits: records.len(),
            total_days: days.len(),
            total_hours,
            months,
        }
    }

    pub fn first_month(&self) -> Option<u32> {
        self.months.first().copied()
    }

    /// `(5)월,\u{a0}(6)회,\u{a0}(2)일,(12)시간`
    pub fn header_line(&self) -> String {
        let month = self
            .first_month()
            .map(|m| m.to_string())
            .unwrap_or_default();
        format!(
            "({})월,\u{a0}({})회,\u{a0}({})일,({})시간",
            month,
            self.total_visits,
            self.total_days,
            format_hours(self.total_hours)
        )
    }
}
