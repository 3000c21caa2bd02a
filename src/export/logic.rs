//! Dispatch between the export writers.

use crate::errors::AppResult;
use crate::export::model::RecordExport;
use crate::export::{ExportFormat, csv, json, xlsx};
use crate::models::record::TimeRecord;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(records: &[TimeRecord], format: &ExportFormat, path: &Path) -> AppResult<()> {
        let flat: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => csv::export_csv(&flat, path),
            ExportFormat::Json => json::export_json(&flat, path),
            ExportFormat::Xlsx => xlsx::export_xlsx(&flat, path),
        }
    }
}
