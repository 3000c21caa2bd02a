//! Attendance event pairs as read from the records sheet.
//!
//! Wire cells are strings; everything past the row mapper works with typed
//! days and times. A `None` day or time means the cell was blank or not
//! parseable; read-side queries tolerate such rows and simply exclude them
//! from filters that need the value.

use crate::models::collaborator::CollaboratorType;
use crate::utils::date::format_day;
use crate::utils::time::{format_time, minutes_between};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Records sheet layout (columns A..G).
pub const RECORD_HEADERS: [&str; 7] = [
    "Collaborator_ID",
    "Name",
    "Sector",
    "Type",
    "Day",
    "Entry",
    "Exit",
];

pub const IDX_COLLABORATOR: usize = 0;
pub const IDX_DAY: usize = 4;
pub const IDX_ENTRY: usize = 5;
pub const IDX_EXIT: usize = 6;
pub const RECORD_COLUMNS: usize = 7;

pub const H_DAY: &str = "Day";
pub const H_ENTRY: &str = "Entry";
pub const H_EXIT: &str = "Exit";

#[derive(Debug, Clone, Serialize)]
pub struct TimeRecord {
    pub collaborator_id: String,
    pub name: String,
    pub sector: String,
    #[serde(rename = "type")]
    pub kind: Option<CollaboratorType>,
    pub day: Option<NaiveDate>,
    pub entry: Option<NaiveTime>,
    pub exit: Option<NaiveTime>,
    /// 1-based data-row ordinal within the sheet snapshot it was read from.
    pub record_id: u32,
}

impl TimeRecord {
    /// A record with an entry and no exit is still open.
    pub fn is_open(&self) -> bool {
        self.entry.is_some() && self.exit.is_none()
    }

    /// Meal duration in minutes; None when either bound is missing or the
    /// pair is not positive (clock typos, exit before entry).
    pub fn duration_minutes(&self) -> Option<i64> {
        let entry = self.entry?;
        let exit = self.exit?;
        let mins = minutes_between(entry, exit);
        if mins > 0 { Some(mins) } else { None }
    }

    pub fn day_str(&self) -> String {
        self.day.map(format_day).unwrap_or_default()
    }

    pub fn entry_str(&self) -> String {
        self.entry.map(format_time).unwrap_or_default()
    }

    pub fn exit_str(&self) -> String {
        self.exit.map(format_time).unwrap_or_default()
    }
}
