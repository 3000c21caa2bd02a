//! Per-field structural schemas and dataset-level validation for
//! sheet-sourced data. Failures surface as field -> message pairs, never as
//! a crash.

use crate::errors::{AppError, AppResult, FieldError};
use crate::models::collaborator::CollaboratorType;
use crate::sheet::mapper::RawRow;
use crate::utils::date::normalize_day;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Cell values treated as "nothing recorded" when judging a dataset empty.
pub const EMPTY_SENTINELS: [&str; 2] = ["", "N/A"];

fn text_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ' -]+$").expect("text field pattern is valid")
    })
}

fn day_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2}$").expect("day pattern is valid"))
}

/// Outcome of the dataset-level check, mirroring the store read contract:
/// a header-only or all-placeholder sheet is "no data", not an error.
#[derive(Debug)]
pub struct SheetValidation {
    pub valid: bool,
    pub message: Option<String>,
}

/// Reject a candidate set that is empty, or whose every field of every row
/// is an empty sentinel. Distinguishes "store truly empty" from "store has
/// at least one real row".
pub fn validate_sheet_data(rows: &[RawRow]) -> SheetValidation {
    if rows.is_empty() {
        return SheetValidation {
            valid: false,
            message: Some("No data found".to_string()),
        };
    }

    let all_empty = rows.iter().all(|row| {
        row.values()
            .all(|value| EMPTY_SENTINELS.contains(&value.trim()))
    });

    if all_empty {
        return SheetValidation {
            valid: false,
            message: Some("No valid data found".to_string()),
        };
    }

    SheetValidation {
        valid: true,
        message: None,
    }
}

/// Identifier: non-negative integer or digit-only string. Returns the
/// trimmed canonical form.
pub fn parse_collaborator_id(value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("collaborator_id", "must not be empty"));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new("collaborator_id", "must be numeric"));
    }
    Ok(trimmed.to_string())
}

/// Name/sector style field: letters (with Latin-1 accents), spaces and
/// hyphens, at least two characters.
pub fn validate_text_field(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new(field, "must contain at least two letters"));
    }
    if !text_field_re().is_match(trimmed) {
        return Err(FieldError::new(field, "must contain only letters"));
    }
    Ok(trimmed.to_string())
}

/// Day field: D{1,2}/M{1,2}/YY shape (`-` tolerated) resolving to a real
/// calendar date. `31/02/24` matches the shape but is rejected.
pub fn parse_day_field(field: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = value.trim();
    if !day_shape_re().is_match(trimmed) {
        return Err(FieldError::new(field, "must match DD/MM/YY"));
    }
    normalize_day(trimmed).ok_or_else(|| FieldError::new(field, "is not a real calendar date"))
}

pub fn parse_type_field(value: &str) -> Result<CollaboratorType, FieldError> {
    CollaboratorType::from_label(value).ok_or_else(|| {
        FieldError::new(
            "type",
            "must be one of resident, visitor, outsourced, staff",
        )
    })
}

pub fn parse_time_field(field: &'static str, value: &str) -> Result<NaiveTime, FieldError> {
    parse_time(value).ok_or_else(|| FieldError::new(field, "must match HH:mm"))
}

/// Month inputs are validated before any month-scoped aggregation runs;
/// the filters themselves assume the range was already checked.
pub fn validate_month(month: u32) -> AppResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(AppError::InvalidMonth(month.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::mapper::map_sheet;

    fn sheet(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn empty_and_placeholder_datasets_are_invalid() {
        let empty = validate_sheet_data(&[]);
        assert!(!empty.valid);

        let placeholders = map_sheet(&sheet(&[
            &["Collaborator_ID", "Name"],
            &["", "N/A"],
            &["N/A", ""],
        ]));
        assert!(!validate_sheet_data(&placeholders).valid);
    }

    #[test]
    fn one_real_row_makes_the_dataset_valid() {
        let rows = map_sheet(&sheet(&[
            &["Collaborator_ID", "Name"],
            &["", "N/A"],
            &["7", "Ana"],
        ]));
        assert!(validate_sheet_data(&rows).valid);
    }

    #[test]
    fn collaborator_id_accepts_digit_strings_only() {
        assert_eq!(parse_collaborator_id(" 42 ").unwrap(), "42");
        assert!(parse_collaborator_id("").is_err());
        assert!(parse_collaborator_id("-1").is_err());
        assert!(parse_collaborator_id("4a").is_err());
    }

    #[test]
    fn text_fields_need_two_letters() {
        assert_eq!(validate_text_field("sector", " Kitchen ").unwrap(), "Kitchen");
        assert!(validate_text_field("sector", "K").is_err());
        assert!(validate_text_field("sector", "K1tchen").is_err());
        // accented names are legitimate
        assert!(validate_text_field("name", "José Antônio").is_ok());
    }

    #[test]
    fn day_field_requires_shape_and_a_real_date() {
        assert!(parse_day_field("day", "05/01/24").is_ok());
        assert!(parse_day_field("day", "5-1-24").is_ok());
        assert!(parse_day_field("day", "31/02/24").is_err());
        assert!(parse_day_field("day", "2024-01-05").is_err());
    }

    #[test]
    fn time_field_requires_hh_mm() {
        assert!(parse_time_field("entry", "08:05").is_ok());
        let err = parse_time_field("exit", "8h05").unwrap_err();
        assert_eq!(err.field, "exit");
    }

    #[test]
    fn month_bounds_are_enforced() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }
}
