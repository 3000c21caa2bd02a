use predicates::str::contains;

mod common;
use common::{RECORDS_SHEET, append_rows, read_sheet, refectory, setup_store};

#[test]
fn scan_closes_the_open_entry_in_place() {
    let store = setup_store("scan_close");
    append_rows(&store, RECORDS_SHEET, &["7,Ana,Kitchen,Staff,05/01/24,08:00,"]);

    refectory()
        .args(["--store", &store, "--at", "05/01/24 12:30", "scan", "7"])
        .assert()
        .success()
        .stdout(contains("exit(s) recorded"));

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 2, "no row must be appended when closing");
    assert_eq!(rows[1][6], "12:30");
    assert_eq!(rows[1][5], "08:00");
}

#[test]
fn scan_on_header_only_store_appends_one_open_row() {
    let store = setup_store("scan_append");

    refectory()
        .args(["--store", &store, "--at", "05/01/24 08:00", "scan", "9"])
        .assert()
        .success()
        .stdout(contains("entry(ies) opened"));

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "9");
    assert_eq!(rows[1][4], "05/01/24");
    assert_eq!(rows[1][5], "08:00");
    assert_eq!(rows[1][6], "");
}

#[test]
fn second_scan_of_the_day_closes_then_a_third_reopens() {
    let store = setup_store("scan_cycle");

    refectory()
        .args(["--store", &store, "--at", "05/01/24 08:00", "scan", "7"])
        .assert()
        .success();
    refectory()
        .args(["--store", &store, "--at", "05/01/24 12:30", "scan", "7"])
        .assert()
        .success();
    refectory()
        .args(["--store", &store, "--at", "05/01/24 18:05", "scan", "7"])
        .assert()
        .success();

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][6], "12:30"); // first pair closed
    assert_eq!(rows[2][5], "18:05"); // fresh open entry
    assert_eq!(rows[2][6], "");
}

#[test]
fn duplicate_id_in_one_batch_closes_and_reopens() {
    let store = setup_store("scan_duplicate");
    append_rows(&store, RECORDS_SHEET, &["7,Ana,Kitchen,Staff,05/01/24,08:00,"]);

    refectory()
        .args(["--store", &store, "--at", "05/01/24 12:30", "scan", "7", "7"])
        .assert()
        .success();

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][6], "12:30");
    assert_eq!(rows[2][0], "7");
    assert_eq!(rows[2][6], "");
}

#[test]
fn yesterdays_open_row_is_not_closed_today() {
    let store = setup_store("scan_yesterday");
    append_rows(&store, RECORDS_SHEET, &["7,Ana,Kitchen,Staff,04/01/24,08:00,"]);

    refectory()
        .args(["--store", &store, "--at", "05/01/24 08:10", "scan", "7"])
        .assert()
        .success()
        .stdout(contains("entry(ies) opened"));

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][6], "", "yesterday's row stays open");
    assert_eq!(rows[2][4], "05/01/24");
}

#[test]
fn placeholder_exit_cells_count_as_open() {
    let store = setup_store("scan_placeholder");
    append_rows(&store, RECORDS_SHEET, &["7,Ana,Kitchen,Staff,05/01/24,08:00,xx:xx"]);

    refectory()
        .args(["--store", &store, "--at", "05/01/24 12:30", "scan", "7"])
        .assert()
        .success()
        .stdout(contains("exit(s) recorded"));

    let rows = read_sheet(&store, RECORDS_SHEET);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][6], "12:30");
}

#[test]
fn malformed_id_fails_the_batch_but_keeps_earlier_mutations() {
    let store = setup_store("scan_malformed");
    append_rows(&store, RECORDS_SHEET, &["7,Ana,Kitchen,Staff,05/01/24,08:00,"]);

    refectory()
        .args(["--store", &store, "--at", "05/01/24 12:30", "scan", "7", "abc", "9"])
        .assert()
        .failure()
        .stderr(contains("collaborator_id"));

    let rows = read_sheet(&store, RECORDS_SHEET);
    // the close for "7" was applied, nothing was queued for "9"
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][6], "12:30");
}
