//! Scan reconciliation: turn a batch of collaborator-identifier scans into
//! the minimal set of store mutations that preserves the one-open-row-per
//! collaborator-per-day invariant.
//!
//! Each call re-reads the sheet fresh, never through the cache: a stale
//! open-entry position would close the wrong cell.

use crate::cache::SheetCache;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::{IDX_COLLABORATOR, IDX_DAY, IDX_ENTRY, IDX_EXIT, RECORD_COLUMNS, TimeRecord};
use crate::sheet::validate::parse_collaborator_id;
use crate::store::range::{column_index_to_letter, normalize_range, sheet_name_of};
use crate::store::{CellUpdate, SheetStore};
use crate::utils::date::{format_day, normalize_day};
use chrono::{DateTime, FixedOffset, NaiveDate};
use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Placeholder strings a hand-edited sheet may carry in the exit column.
/// They count as "no exit recorded", like a blank cell.
const EMPTY_EXIT_PLACEHOLDERS: [&str; 2] = ["n/a", "xx:xx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Open rows whose exit cell was filled by this batch.
    pub closed: usize,
    /// New rows appended with an entry and no exit.
    pub opened: usize,
}

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)collaborator.*id").expect("header pattern is valid"))
}

/// Heuristic header classifier: row 0 is a header when any cell looks like
/// a "Collaborator_ID" label. A data row whose name cell happens to match
/// would be misclassified; identifiers are digit-only, so in practice the
/// first column never triggers it.
pub fn has_header_row(rows: &[Vec<String>]) -> bool {
    rows.first()
        .map(|row| row.iter().any(|cell| header_re().is_match(cell)))
        .unwrap_or(false)
}

pub fn exit_cell_is_empty(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty()
        || EMPTY_EXIT_PLACEHOLDERS
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Index of the most recent open row per raw identifier key: dated today,
/// exit cell empty. Rows are scanned bottom-up and the first hit per key
/// wins, which is the most recent occurrence.
pub fn index_open_entries(
    rows: &[Vec<String>],
    data_start: usize,
    today: NaiveDate,
) -> HashMap<String, usize> {
    let mut open: HashMap<String, usize> = HashMap::new();

    for i in (data_start..rows.len()).rev() {
        let row = &rows[i];

        let id = row.get(IDX_COLLABORATOR).map(|s| s.trim()).unwrap_or("");
        let raw_day = row.get(IDX_DAY).map(|s| s.trim()).unwrap_or("");
        let exit = row.get(IDX_EXIT).map(String::as_str).unwrap_or("");

        if id.is_empty() || raw_day.is_empty() {
            continue;
        }
        let Some(day) = normalize_day(raw_day) else {
            continue;
        };

        if day == today && exit_cell_is_empty(exit) {
            open.entry(id.to_string()).or_insert(i);
        }
    }

    open
}

/// Reconcile a batch of scans against the records sheet.
///
/// "Today" and "now" are computed once from `now` and used for every scan
/// in the batch, so a batch spanning midnight stays internally consistent.
///
/// A malformed identifier stops the batch before anything is queued for the
/// scans after it; mutations queued for earlier scans are still applied,
/// since the store offers no multi-statement atomicity to roll them back.
pub fn send_records<S: SheetStore>(
    store: &S,
    cache: &SheetCache<TimeRecord>,
    cfg: &Config,
    range: &str,
    scans: &[String],
    now: DateTime<FixedOffset>,
) -> AppResult<ReconcileOutcome> {
    let actual_range = normalize_range(range, &cfg.records_sheet, "A:G");
    let sheet_name = sheet_name_of(&actual_range).to_string();
    let read_range = format!("{sheet_name}!A:G");

    let rows = store.get(&read_range)?;
    let data_start = if has_header_row(&rows) { 1 } else { 0 };

    let today = now.date_naive();
    let today_formatted = format_day(today);
    let now_time = now.format("%H:%M").to_string();

    let mut open_entries = index_open_entries(&rows, data_start, today);
    let exit_column = column_index_to_letter(IDX_EXIT);

    let mut updates: Vec<CellUpdate> = Vec::new();
    let mut appends: Vec<Vec<String>> = Vec::new();
    let mut failed: Option<AppError> = None;

    for scan in scans {
        let id = match parse_collaborator_id(scan) {
            Ok(id) => id,
            Err(field_error) => {
                failed = Some(AppError::InvalidField(field_error));
                break;
            }
        };

        if let Some(row_index) = open_entries.remove(&id) {
            // Close the open entry. Removing the key means a repeat scan of
            // the same identifier in this batch opens a fresh entry instead
            // of double-closing.
            let sheet_row = row_index + 1;
            updates.push(CellUpdate {
                range: format!("{sheet_name}!{exit_column}{sheet_row}"),
                values: vec![vec![now_time.clone()]],
            });
        } else {
            let mut row = vec![String::new(); RECORD_COLUMNS];
            row[IDX_COLLABORATOR] = id;
            row[IDX_DAY] = today_formatted.clone();
            row[IDX_ENTRY] = now_time.clone();
            row[IDX_EXIT] = String::new();
            appends.push(row);
        }
    }

    let closed = updates.len();
    let opened = appends.len();

    if !updates.is_empty() {
        store.batch_update(&updates)?;
    }
    if !appends.is_empty() {
        store.append(&read_range, &appends)?;
    }

    cache.clear();

    debug!(
        "reconciled {} scan(s) on {}: {} closed, {} opened",
        scans.len(),
        sheet_name,
        closed,
        opened
    );

    match failed {
        Some(err) => Err(err),
        None => Ok(ReconcileOutcome { closed, opened }),
    }
}
