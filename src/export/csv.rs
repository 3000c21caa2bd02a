use crate::errors::AppResult;
use crate::export::model::{RecordExport, get_headers, record_to_row};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for record in records {
        wtr.write_record(record_to_row(record))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
