use std::path::PathBuf;

use netinv_model::{AnomalyReport, CleanedRecord, Confidence};

/// Resolved run options, independent of the clap surface.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Everything a finished run reports back to the terminal.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub rows: usize,
    /// `None` on dry runs.
    pub cleaned_csv: Option<PathBuf>,
    /// `None` on dry runs.
    pub anomaly_json: Option<PathBuf>,
    pub report: AnomalyReport,
    pub stats: FieldStats,
}

/// Per-field validity counts over the cleaned dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldStats {
    pub rows: usize,
    pub ip_valid: usize,
    pub hostname_valid: usize,
    pub fqdn_consistent: usize,
    pub mac_valid: usize,
    pub device_high: usize,
    pub device_medium: usize,
    pub device_low: usize,
    pub sites_normalized: usize,
}

impl FieldStats {
    pub fn collect(records: &[CleanedRecord]) -> Self {
        let mut stats = Self {
            rows: records.len(),
            ..Self::default()
        };
        for record in records {
            if record.ip_valid {
                stats.ip_valid += 1;
            }
            if record.hostname_valid == Some(true) {
                stats.hostname_valid += 1;
            }
            if record.fqdn_consistent == Some(true) {
                stats.fqdn_consistent += 1;
            }
            if record.mac_valid == Some(true) {
                stats.mac_valid += 1;
            }
            match record.device_type_confidence {
                Confidence::High => stats.device_high += 1,
                Confidence::Medium => stats.device_medium += 1,
                Confidence::Low => stats.device_low += 1,
            }
            if !record.site_normalized.is_empty() {
                stats.sites_normalized += 1;
            }
        }
        stats
    }
}
