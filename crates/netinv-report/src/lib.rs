//! Output serialization: the cleaned inventory CSV and the anomaly report.
//!
//! Cleaned rows are written in input order with a fixed column layout (the
//! `CleanedRecord` field order). Anomalies serialize to a pretty-printed
//! JSON array. Failures here are fatal for the run and carry path context.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use netinv_model::{AnomalyReport, CleanedRecord};

/// Write the cleaned dataset, one row per input row, input order preserved.
pub fn write_cleaned_csv(path: &Path, records: &[CleanedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output csv {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write row {} to {}", record.source_row_id, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output csv {}", path.display()))?;
    debug!(rows = records.len(), path = %path.display(), "cleaned csv written");
    Ok(())
}

/// Write the anomaly report as a JSON array.
pub fn write_anomaly_report(path: &Path, report: &AnomalyReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create anomaly report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("serialize anomaly report {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("flush anomaly report {}", path.display()))?;
    debug!(anomalies = report.len(), path = %path.display(), "anomaly report written");
    Ok(())
}
