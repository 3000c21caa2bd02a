//! Time utilities: parsing HH:mm, duration computations, formatting minutes.

use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// Format a minute count as HH:mm. Negative values keep a leading sign.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_round_trip() {
        let t = parse_time(" 08:05 ").unwrap();
        assert_eq!(format_time(t), "08:05");
        assert!(parse_time("8h30").is_none());
        assert!(parse_time("").is_none());
    }

    #[test]
    fn minutes_between_is_signed() {
        let a = parse_time("08:00").unwrap();
        let b = parse_time("09:30").unwrap();
        assert_eq!(minutes_between(a, b), 90);
        assert_eq!(minutes_between(b, a), -90);
    }

    #[test]
    fn format_minutes_pads_and_signs() {
        assert_eq!(format_minutes(45), "00:45");
        assert_eq!(format_minutes(125), "02:05");
        assert_eq!(format_minutes(-30), "-00:30");
    }
}
