//! Header-driven mapping from raw sheet rows to named-field candidates and
//! on to the typed domain shapes.

use crate::models::collaborator::{
    Collaborator, CollaboratorType, H_COLLABORATOR_ID, H_NAME, H_SECTOR, H_TYPE,
};
use crate::models::record::{H_DAY, H_ENTRY, H_EXIT, TimeRecord};
use crate::utils::date::normalize_day;
use crate::utils::time::parse_time;

/// One data row with cells addressed by the header's field names.
/// Field order follows the header; missing cells read as empty strings.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Cell value for a header name; "" when the column is absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Zip the first row (treated as a field-name header) with each subsequent
/// row positionally. Cells past the end of a short row become "".
pub fn map_sheet(values: &[Vec<String>]) -> Vec<RawRow> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| {
            let fields = header
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    (name.clone(), cell)
                })
                .collect();
            RawRow::from_pairs(fields)
        })
        .collect()
}

/// Typed record from a named-field candidate. Blank or unparseable day and
/// time cells become None; read-side filters exclude them as needed.
pub fn map_row_to_record(row: &RawRow, ordinal: u32) -> TimeRecord {
    TimeRecord {
        collaborator_id: row.get(H_COLLABORATOR_ID).trim().to_string(),
        name: row.get(H_NAME).trim().to_string(),
        sector: row.get(H_SECTOR).trim().to_string(),
        kind: CollaboratorType::from_label(row.get(H_TYPE)),
        day: normalize_day(row.get(H_DAY)),
        entry: parse_time(row.get(H_ENTRY)),
        exit: parse_time(row.get(H_EXIT)),
        record_id: ordinal,
    }
}

pub fn map_row_to_collaborator(row: &RawRow) -> Collaborator {
    Collaborator {
        collaborator_id: row.get(H_COLLABORATOR_ID).trim().to_string(),
        name: row.get(H_NAME).trim().to_string(),
        sector: row.get(H_SECTOR).trim().to_string(),
        kind: CollaboratorType::from_label(row.get(H_TYPE)),
    }
}
