//! CSV ingestion for raw inventory rows.
//!
//! Header-driven: columns are matched by name, unknown columns are ignored,
//! and absent columns deserialize to empty strings. Cell whitespace is
//! trimmed at the reader level. Fatal errors are I/O, malformed CSV
//! structure, and tables with no recognizable inventory column.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use netinv_model::{NetinvError, RawRecord};

/// Columns the cleaner knows how to consume. At least one must be present
/// for a file to count as an inventory export.
const KNOWN_COLUMNS: &[&str] = &[
    "source_row_id",
    "ip",
    "mac",
    "hostname",
    "fqdn",
    "owner",
    "device_type",
    "notes",
    "site",
];

/// Read the raw inventory table, in input order.
///
/// Rows without a `source_row_id` get a deterministic `row-<n>` fallback
/// (1-based record number) so anomalies stay addressable.
pub fn read_inventory(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open input csv {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("read header row of {}", path.display()))?;
    if !headers.iter().any(|h| KNOWN_COLUMNS.contains(&h)) {
        return Err(NetinvError::Message(format!(
            "no recognized inventory columns in {}",
            path.display()
        ))
        .into());
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRecord>().enumerate() {
        let record_number = idx + 1;
        let mut record = row.with_context(|| {
            format!("parse record {} of {}", record_number, path.display())
        })?;
        if record.source_row_id.is_empty() {
            record.source_row_id = format!("row-{record_number}");
        }
        records.push(record);
    }
    debug!(rows = records.len(), path = %path.display(), "inventory ingested");
    Ok(records)
}
