//! The clean command: ingest, normalize, write outputs.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use netinv_ingest::read_inventory;
use netinv_model::AnomalyReport;
use netinv_normalize::clean_row;
use netinv_report::{write_anomaly_report, write_cleaned_csv};

use crate::types::{CleanOptions, CleanResult, FieldStats};

/// Output file names inside the output directory.
pub const CLEANED_CSV_NAME: &str = "inventory_clean.csv";
pub const ANOMALY_JSON_NAME: &str = "anomalies.json";

pub fn run_clean(options: &CleanOptions) -> Result<CleanResult> {
    let run_span = info_span!("clean", input = %options.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    // Stage 1: ingest raw rows.
    let ingest_span = info_span!("ingest");
    let raw_rows = ingest_span.in_scope(|| read_inventory(&options.input))?;
    info!(rows = raw_rows.len(), "ingest complete");

    // Stage 2: normalize each row independently, input order preserved.
    let normalize_span = info_span!("normalize");
    let (records, report) = normalize_span.in_scope(|| {
        let mut records = Vec::with_capacity(raw_rows.len());
        let mut report = AnomalyReport::default();
        for raw in &raw_rows {
            let (record, anomalies) = clean_row(raw);
            report.extend(anomalies);
            records.push(record);
        }
        (records, report)
    });
    info!(
        rows = records.len(),
        anomalies = report.len(),
        rows_affected = report.rows_affected(),
        "normalization complete"
    );

    let stats = FieldStats::collect(&records);

    // Stage 3: write outputs, unless this is a dry run.
    let (cleaned_csv, anomaly_json) = if options.dry_run {
        info!("dry run, skipping output files");
        (None, None)
    } else {
        fs::create_dir_all(&options.output_dir)
            .with_context(|| format!("create output dir {}", options.output_dir.display()))?;
        let csv_path = options.output_dir.join(CLEANED_CSV_NAME);
        let json_path = options.output_dir.join(ANOMALY_JSON_NAME);
        let output_span = info_span!("output");
        output_span.in_scope(|| -> Result<()> {
            write_cleaned_csv(&csv_path, &records)?;
            write_anomaly_report(&json_path, &report)?;
            Ok(())
        })?;
        (Some(csv_path), Some(json_path))
    };

    info!(elapsed_ms = start.elapsed().as_millis() as u64, "run complete");
    Ok(CleanResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        rows: records.len(),
        cleaned_csv,
        anomaly_json,
        report,
        stats,
    })
}
