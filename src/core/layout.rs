//! Where every field lives inside a page of the visit sheet template.
//!
//! All addresses are relative to the page element (`#page_<n>`). Row slots
//! repeat every [`ROW_WEIGHT`] cells, so slot `s` adds `20 * (s - 1)` to the
//! base cell index of the first slot.

use crate::document::FieldPath;
use crate::models::Location;

pub const SLOTS_PER_PAGE: usize = 5;
pub const ROW_WEIGHT: usize = 20;

const DATE_CELL: usize = 15;
const TIME_CELL: usize = 16;
const DETAIL_CELL: usize = 19;

/// A (page, slot) pair, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    pub page: usize,
    pub slot: usize,
}

impl SlotRef {
    /// Slot of the record at 1-based position `position`.
    pub fn for_position(position: usize) -> Self {
        debug_assert!(position > 0, "positions are 1-based");
        let idx = position.saturating_sub(1);
        Self {
            page: idx / SLOTS_PER_PAGE + 1,
            slot: idx % SLOTS_PER_PAGE + 1,
        }
    }

    pub fn page_id(&self) -> String {
        page_id(self.page)
    }

    pub fn row_weight(&self) -> usize {
        ROW_WEIGHT * (self.slot - 1)
    }
}

pub fn page_id(page: usize) -> String {
    format!("page_{page}")
}

/// `ceil(records / 5)`
pub fn pages_needed(records: usize) -> usize {
    records.div_ceil(SLOTS_PER_PAGE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // header, once per page
    Summary,
    City,
    ChildName,
    TeacherName,
    // row slot
    Date,
    Weekday,
    Duration,
    TimeStart,
    TimeEnd,
    Location(Location),
    Detail,
}

impl Field {
    /// Path of the field for the given slot (header fields ignore it).
    pub fn path(&self, slot: SlotRef) -> FieldPath {
        let w = slot.row_weight();
        match self {
            Field::Summary => cell(1).child("div").child("div").nth("div", 2).child("span"),
            Field::City => header_cell(3),
            Field::ChildName => header_cell(5),
            Field::TeacherName => header_cell(7),
            Field::Date => cell(DATE_CELL + w)
                .child("div")
                .child("div")
                .nth("div", 1)
                .child("span"),
            Field::Weekday => cell(DATE_CELL + w)
                .child("div")
                .child("div")
                .nth("div", 3)
                .child("span"),
            Field::Duration => cell(TIME_CELL + w)
                .child("div")
                .child("div")
                .nth("div", 1)
                .nth("span", 1),
            Field::TimeStart => cell(TIME_CELL + w)
                .child("div")
                .child("div")
                .nth("div", 2)
                .child("span"),
            Field::TimeEnd => cell(TIME_CELL + w)
                .child("div")
                .child("div")
                .nth("div", 3)
                .child("span"),
            Field::Location(loc) => cell(loc.offset() + w)
                .child("div")
                .child("div")
                .child("div"),
            Field::Detail => cell(DETAIL_CELL + w)
                .child("div")
                .child("div")
                .child("div")
                .child("span"),
        }
    }
}

/// `div/div[2]/div[n]`: the n-th cell of the page grid.
fn cell(n: usize) -> FieldPath {
    FieldPath::new().child("div").nth("div", 2).nth("div", n)
}

fn header_cell(n: usize) -> FieldPath {
    cell(n).child("div").child("div").child("div").child("span")
}
