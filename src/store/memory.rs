//! In-memory sheet store. Backs the test suite and offline experiments with
//! the same read/append/batch-update semantics as a real deployment.

use super::range::{parse_cell_ref, sheet_name_of};
use super::{CellUpdate, SheetStore};
use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    sheets: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(name: &str, rows: Vec<Vec<String>>) -> Self {
        let store = Self::new();
        store.insert_sheet(name, rows);
        store
    }

    pub fn insert_sheet(&self, name: &str, rows: Vec<Vec<String>>) {
        self.sheets
            .lock()
            .expect("memory store lock poisoned")
            .insert(name.to_string(), rows);
    }

    /// Snapshot of a sheet's rows, for assertions.
    pub fn rows(&self, sheet: &str) -> Vec<Vec<String>> {
        self.sheets
            .lock()
            .expect("memory store lock poisoned")
            .get(sheet)
            .cloned()
            .unwrap_or_default()
    }
}

impl SheetStore for MemoryStore {
    fn get(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows(sheet_name_of(range)))
    }

    fn append(&self, range: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let sheet = sheet_name_of(range).to_string();
        let mut sheets = self.sheets.lock().expect("memory store lock poisoned");
        sheets.entry(sheet).or_default().extend(rows.iter().cloned());
        Ok(())
    }

    fn batch_update(&self, updates: &[CellUpdate]) -> AppResult<()> {
        let mut sheets = self.sheets.lock().expect("memory store lock poisoned");
        for update in updates {
            let cell = parse_cell_ref(&update.range)?;
            let rows = sheets.entry(cell.sheet.clone()).or_default();

            for (r, values_row) in update.values.iter().enumerate() {
                let row_index = cell.row - 1 + r;
                while rows.len() <= row_index {
                    rows.push(Vec::new());
                }
                let row = &mut rows[row_index];
                for (c, value) in values_row.iter().enumerate() {
                    let col_index = cell.col + c;
                    while row.len() <= col_index {
                        row.push(String::new());
                    }
                    row[col_index] = value.clone();
                }
            }
        }
        Ok(())
    }
}
