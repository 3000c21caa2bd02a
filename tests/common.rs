#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const RECORDS_SHEET: &str = "EntryExit";
pub const COLLABORATORS_SHEET: &str = "Collaborators";

pub const RECORD_HEADER: &str = "Collaborator_ID,Name,Sector,Type,Day,Entry,Exit";
pub const COLLABORATOR_HEADER: &str = "Collaborator_ID,Name,Sector,Type";

pub fn refectory() -> Command {
    cargo_bin_cmd!("refectory")
}

/// Create a unique, empty store directory inside the system temp dir,
/// seeded with both sheet headers.
pub fn setup_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_refectory_store", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test store dir");

    write_sheet(&path, RECORDS_SHEET, &[RECORD_HEADER]);
    write_sheet(&path, COLLABORATORS_SHEET, &[COLLABORATOR_HEADER]);

    path.to_string_lossy().to_string()
}

/// Overwrite a sheet file with the given CSV lines.
pub fn write_sheet(store: &PathBuf, sheet: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(store.join(format!("{sheet}.csv")), content).expect("write test sheet");
}

/// Append CSV lines to an existing sheet file.
pub fn append_rows(store: &str, sheet: &str, lines: &[&str]) {
    let path = PathBuf::from(store).join(format!("{sheet}.csv"));
    let mut content = fs::read_to_string(&path).unwrap_or_default();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content).expect("append to test sheet");
}

/// Parse a sheet file back into rows of cells, for assertions.
pub fn read_sheet(store: &str, sheet: &str) -> Vec<Vec<String>> {
    let path = PathBuf::from(store).join(format!("{sheet}.csv"));
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)
        .expect("read test sheet");
    rdr.records()
        .map(|r| r.expect("csv row").iter().map(str::to_string).collect())
        .collect()
}
