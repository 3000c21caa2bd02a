//! Read-side record filters: shift windows, month membership, field equality.

use crate::models::record::TimeRecord;
use crate::models::turn::Turn;
use chrono::{Datelike, NaiveTime};

/// Which time-of-day field of a record a turn filter applies to.
#[derive(Debug, Clone, Copy)]
pub enum TimeField {
    Entry,
    Exit,
}

/// Inclusive on both window bounds: a 12:00 entry belongs to an afternoon
/// turn that starts at 12:00.
pub fn is_time_inside_shift(time: NaiveTime, turn: Turn) -> bool {
    let window = turn.window();
    time >= window.start && time <= window.end
}

/// Records whose chosen time field falls inside the turn window. Records
/// without that time recorded are excluded.
pub fn filter_by_turn(records: Vec<TimeRecord>, field: TimeField, turn: Turn) -> Vec<TimeRecord> {
    records
        .into_iter()
        .filter(|record| {
            let time = match field {
                TimeField::Entry => record.entry,
                TimeField::Exit => record.exit,
            };
            time.map(|t| is_time_inside_shift(t, turn)).unwrap_or(false)
        })
        .collect()
}

/// Records whose day matches both month and year exactly. Rows whose day
/// cell never parsed are excluded, not an error. Month range is the
/// caller's responsibility (validated in the service pre-step).
pub fn filter_by_month_and_year(
    records: Vec<TimeRecord>,
    month: u32,
    year: i32,
) -> Vec<TimeRecord> {
    records
        .into_iter()
        .filter(|record| match record.day {
            Some(day) => day.month() == month && day.year() == year,
            None => false,
        })
        .collect()
}

pub fn filter_by_sector(records: Vec<TimeRecord>, sector: &str) -> Vec<TimeRecord> {
    let wanted = sector.trim().to_lowercase();
    records
        .into_iter()
        .filter(|record| record.sector.trim().to_lowercase() == wanted)
        .collect()
}

pub fn filter_by_day(records: Vec<TimeRecord>, day: chrono::NaiveDate) -> Vec<TimeRecord> {
    records
        .into_iter()
        .filter(|record| record.day == Some(day))
        .collect()
}

pub fn filter_by_collaborator_id(records: Vec<TimeRecord>, id: &str) -> Vec<TimeRecord> {
    records
        .into_iter()
        .filter(|record| record.collaborator_id == id)
        .collect()
}
