//! Day handling for the store wire format (DD/MM/YY) and the deployment
//! site clock. The fixed UTC offset comes from configuration: the store is
//! shared by scanners at a single site, so "today" must not depend on the
//! host timezone of whichever process runs a batch.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

pub const DAY_FORMAT: &str = "%d/%m/%y";

pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FORMAT).ok()
}

/// Day cells sometimes arrive hand-edited with `-` separators; accept both.
pub fn normalize_day(s: &str) -> Option<NaiveDate> {
    parse_day(&s.trim().replace('-', "/"))
}

pub fn format_day(d: NaiveDate) -> String {
    d.format(DAY_FORMAT).to_string()
}

fn site_offset(offset_hours: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is always valid"))
}

/// Current date and time at the deployment site's fixed UTC offset.
pub fn now_at_offset(offset_hours: i32) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&site_offset(offset_hours))
}

/// Parse a pinned clock value ("DD/MM/YY HH:mm") at the site offset.
pub fn parse_pinned_now(s: &str, offset_hours: i32) -> AppResult<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), "%d/%m/%y %H:%M")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    naive
        .and_local_timezone(site_offset(offset_hours))
        .single()
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_wire_days() {
        let d = parse_day("05/01/24").unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (5, 1, 2024));
        // single-digit day and month are accepted
        assert!(parse_day("5/1/24").is_some());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_day("31/02/24").is_none());
        assert!(parse_day("00/01/24").is_none());
    }

    #[test]
    fn normalize_accepts_dash_separators() {
        assert_eq!(normalize_day("05-01-24"), parse_day("05/01/24"));
        assert!(normalize_day("not a day").is_none());
    }

    #[test]
    fn pinned_now_keeps_the_given_wall_clock() {
        let now = parse_pinned_now("05/01/24 12:30", -3).unwrap();
        assert_eq!(format_day(now.date_naive()), "05/01/24");
        assert_eq!(now.format("%H:%M").to_string(), "12:30");
    }
}
