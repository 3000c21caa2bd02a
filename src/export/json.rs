use crate::errors::AppResult;
use crate::export::model::RecordExport;
use crate::export::notify_export_success;
use std::fs;
use std::path::Path;

pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
