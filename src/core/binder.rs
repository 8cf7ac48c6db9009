use crate::core::layout::{Field, SlotRef};
use crate::document::{Document, Element};
use crate::errors::{AppError, AppResult};
use crate::models::{Location, Record, Summary};
use crate::utils::date::{month_day_ko, weekday_ko};
use crate::utils::{format_hour_hhmm, format_hours};
use std::fmt;

const NBSP: char = '\u{a0}';
const SIGNATURE: &str = "(서명)";
const CHECK_MARK: &str = "O";
const CHECK_STYLE: &str = "padding-left: 5px; padding-bottom: 5px;";
const DETAIL_STYLE: &str = "white-space: pre-wrap; text-align: center;";

/// Values printed in the header of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHeader {
    pub city: String,
    pub child_name: String,
    pub teacher_name: String,
}

/// Row-level problems that do not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindIssue {
    /// The location code matches none of the known places; no box is checked.
    /// `row` is the data row of the record.
    UnknownLocation { row: usize, value: String },
    /// The page has no detail cell for this slot; the detail is not printed.
    MissingDetail { page: String, detail: String },
}

impl fmt::Display for BindIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindIssue::UnknownLocation { row, value } => {
                write!(f, "Unknown location at row {row}: '{value}' (no box checked)")
            }
            BindIssue::MissingDetail { page, detail } => {
                write!(f, "Detail cell missing in {page}, not printed: {detail}")
            }
        }
    }
}

/// Writes records into their (page, slot) cells.
pub struct FieldBinder<'a> {
    doc: &'a mut Document,
    header: &'a SheetHeader,
    summary_line: String,
}

impl<'a> FieldBinder<'a> {
    pub fn new(doc: &'a mut Document, header: &'a SheetHeader, summary: &Summary) -> Self {
        Self {
            doc,
            header,
            summary_line: summary.header_line(),
        }
    }

    /// Bind every record in order; positions start at 1.
    pub fn bind_all(&mut self, records: &[Record]) -> AppResult<Vec<BindIssue>> {
        let mut issues = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            issues.extend(self.bind(idx + 1, record)?);
        }
        Ok(issues)
    }

    /// Bind one record at 1-based `position` (its place among the records,
    /// which decides page and slot).
    ///
    /// Writing the same record twice leaves the page unchanged: every write
    /// replaces the previous content of its cell.
    pub fn bind(&mut self, position: usize, record: &Record) -> AppResult<Vec<BindIssue>> {
        if position == 0 {
            return Err(AppError::Other(
                "record positions start at 1, got 0".to_string(),
            ));
        }
        let slot = SlotRef::for_position(position);
        let page_id = slot.page_id();
        let page = self
            .doc
            .element_by_id_mut(&page_id)
            .ok_or_else(|| AppError::Template(format!("page '{page_id}' not found")))?;

        let mut issues = Vec::new();

        // 0. header
        set_text(page, &page_id, Field::Summary, slot, &self.summary_line)?;
        set_text(page, &page_id, Field::City, slot, &self.header.city)?;
        let child = set_text(page, &page_id, Field::ChildName, slot, &self.header.child_name)?;
        child.set_attr("text-align", "right");
        let teacher = format!(
            "{}{}{}",
            self.header.teacher_name,
            NBSP.to_string().repeat(6),
            SIGNATURE
        );
        set_text(page, &page_id, Field::TeacherName, slot, &teacher)?;

        // 1. date
        set_text(page, &page_id, Field::Date, slot, &month_day_ko(record.date))?;
        set_text(page, &page_id, Field::Weekday, slot, weekday_ko(record.date))?;

        // 2. time
        let duration = format!("{}{}", format_hours(record.work_hours()), NBSP);
        set_text(page, &page_id, Field::Duration, slot, &duration)?;
        let start = format!(
            "{}({}{}~{}",
            NBSP.to_string().repeat(6),
            format_hour_hhmm(record.start_hour),
            NBSP,
            NBSP
        );
        set_text(page, &page_id, Field::TimeStart, slot, &start)?;
        let end = format!("{})", format_hour_hhmm(record.end_hour));
        set_text(page, &page_id, Field::TimeEnd, slot, &end)?;

        // 3. locations
        for loc in Location::ALL {
            set_text(page, &page_id, Field::Location(loc), slot, "")?;
        }
        match record.location() {
            Some(loc) => {
                let cell = set_text(page, &page_id, Field::Location(loc), slot, CHECK_MARK)?;
                cell.set_attr("style", CHECK_STYLE);
            }
            None => issues.push(BindIssue::UnknownLocation {
                row: record.row,
                value: record.location_code.clone(),
            }),
        }

        // 4. detail
        match page.select_mut(&Field::Detail.path(slot)) {
            Some(cell) => {
                cell.set_attr("style", DETAIL_STYLE);
                cell.set_text(&record.detail);
            }
            None => issues.push(BindIssue::MissingDetail {
                page: page_id.clone(),
                detail: record.detail.clone(),
            }),
        }

        Ok(issues)
    }
}

/// Overwrite the text of a required field and hand the element back.
fn set_text<'e>(
    page: &'e mut Element,
    page_id: &str,
    field: Field,
    slot: SlotRef,
    value: &str,
) -> AppResult<&'e mut Element> {
    let path = field.path(slot);
    let el = page
        .select_mut(&path)
        .ok_or_else(|| AppError::MissingElement {
            page: page_id.to_string(),
            path: path.to_string(),
        })?;
    el.set_text(value);
    Ok(el)
}
