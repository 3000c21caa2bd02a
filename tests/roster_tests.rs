use predicates::str::contains;

mod common;
use common::{COLLABORATORS_SHEET, append_rows, read_sheet, refectory, setup_store};

#[test]
fn add_then_get_round_trips_through_the_sheet() {
    let store = setup_store("roster_add");

    refectory()
        .args(["--store", &store, "collaborators", "add", "7", "Ana", "Kitchen", "staff"])
        .assert()
        .success()
        .stdout(contains("registered"));

    let rows = read_sheet(&store, COLLABORATORS_SHEET);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["7", "Ana", "Kitchen", "staff"]);

    refectory()
        .args(["--store", &store, "collaborators", "get", "7"])
        .assert()
        .success()
        .stdout(contains("Ana"));
}

#[test]
fn add_reports_every_offending_field() {
    let store = setup_store("roster_invalid");

    refectory()
        .args(["--store", &store, "collaborators", "add", "x1", "A", "Kitchen", "boss"])
        .assert()
        .failure()
        .stderr(contains("Validation failed"))
        .stderr(contains("collaborator_id"))
        .stderr(contains("name"))
        .stderr(contains("type"));

    let rows = read_sheet(&store, COLLABORATORS_SHEET);
    assert_eq!(rows.len(), 1, "nothing may be appended on validation failure");
}

#[test]
fn list_filters_the_roster_by_sector() {
    let store = setup_store("roster_sector");
    append_rows(
        &store,
        COLLABORATORS_SHEET,
        &["7,Ana,Kitchen,staff", "8,Bia,IT,resident"],
    );

    refectory()
        .args(["--store", &store, "collaborators", "list", "--sector", "Kitchen"])
        .assert()
        .success()
        .stdout(contains("Ana"));

    refectory()
        .args(["--store", &store, "collaborators", "list", "--sector", "Garden"])
        .assert()
        .failure()
        .stderr(contains("No collaborator found"));
}

#[test]
fn unknown_id_is_not_found() {
    let store = setup_store("roster_missing");
    append_rows(&store, COLLABORATORS_SHEET, &["7,Ana,Kitchen,staff"]);

    refectory()
        .args(["--store", &store, "collaborators", "get", "99"])
        .assert()
        .failure()
        .stderr(contains("No collaborator found"));
}
