//! CSV-backed sheet store: one `<Sheet>.csv` file per sheet inside a store
//! directory. Lets dev and test deployments run the full engine without
//! network credentials, with the same contract as a hosted spreadsheet.

use super::range::{parse_cell_ref, sheet_name_of};
use super::{CellUpdate, SheetStore};
use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Open (creating if needed) a store directory.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{sheet}.csv"))
    }

    /// Create a sheet file with a header row, if it does not exist yet.
    pub fn create_sheet(&self, sheet: &str, headers: &[&str]) -> AppResult<()> {
        let path = self.sheet_path(sheet);
        if path.exists() {
            return Ok(());
        }
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        wtr.write_record(headers)?;
        wtr.flush()?;
        Ok(())
    }

    fn read_sheet(&self, sheet: &str) -> AppResult<Vec<Vec<String>>> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn write_sheet(&self, sheet: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let path = self.sheet_path(sheet);
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        for row in rows {
            if row.is_empty() {
                // csv cannot represent a zero-field record
                wtr.write_record([""])?;
            } else {
                wtr.write_record(row)?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}

impl SheetStore for CsvStore {
    fn get(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        self.read_sheet(sheet_name_of(range))
    }

    fn append(&self, range: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let path = self.sheet_path(sheet_name_of(range));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn batch_update(&self, updates: &[CellUpdate]) -> AppResult<()> {
        for update in updates {
            let cell = parse_cell_ref(&update.range)?;
            let mut rows = self.read_sheet(&cell.sheet)?;

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

            self.write_sheet(&cell.sheet, &rows)?;
        }
        Ok(())
    }
}
