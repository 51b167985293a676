//! CSV interchange export

use crate::constants::{CSV_HEADER, INTERCHANGE_TIMESTAMP_FORMAT};
use crate::error::{Result, RosterError};
use crate::models::Record;
use chrono::NaiveDateTime;
use tracing::debug;

fn timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|t| t.format(INTERCHANGE_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Export records as CSV with a `Flag,Name,Start,Finish,Rate` header.
///
/// Absent times and rates are written as empty fields.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        writer.write_record([
            record.flag.as_str(),
            record.name.as_str(),
            timestamp(record.start).as_str(),
            timestamp(record.end).as_str(),
            record.rate.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::io("Failed to flush CSV output", e.into_error()))?;
    debug!("Exported {} records as CSV", records.len());

    String::from_utf8(bytes).map_err(|e| {
        RosterError::io(
            "CSV output is not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}
