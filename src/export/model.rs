//! Flat record shape shared by the CSV / JSON / XLSX writers.

use crate::models::record::TimeRecord;
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub record_id: u32,
    pub collaborator_id: String,
    pub name: String,
    pub sector: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub day: String,
    pub entry: String,
    pub exit: String,
}

impl From<&TimeRecord> for RecordExport {
    fn from(record: &TimeRecord) -> Self {
        Self {
            record_id: record.record_id,
            collaborator_id: record.collaborator_id.clone(),
            name: record.name.clone(),
            sector: record.sector.clone(),
            kind: record
                .kind
                .map(|k| k.as_label().to_string())
                .unwrap_or_default(),
            day: record.day_str(),
            entry: record.entry_str(),
            exit: record.exit_str(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "record_id",
        "collaborator_id",
        "name",
        "sector",
        "type",
        "day",
        "entry",
        "exit",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.record_id.to_string(),
        r.collaborator_id.clone(),
        r.name.clone(),
        r.sector.clone(),
        r.kind.clone(),
        r.day.clone(),
        r.entry.clone(),
        r.exit.clone(),
    ]
}
