//! Anomaly records produced by the field normalizers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The input field an anomaly refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Ip,
    Hostname,
    Fqdn,
    Mac,
    DeviceType,
    Site,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::Hostname => "hostname",
            Field::Fqdn => "fqdn",
            Field::Mac => "mac",
            Field::DeviceType => "device_type",
            Field::Site => "site",
        }
    }
}

/// Issue taxonomy for the anomaly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Field was empty or a missing-value sentinel (`n/a`, `none`, ...).
    Missing,
    /// IP failed both strict and relaxed parsing.
    InvalidIp,
    /// RFC1918 address ending in `.0` or `.255`, likely a network or
    /// broadcast address recorded as a host.
    ReservedEdge,
    InvalidHostname,
    InvalidFqdn,
    /// Hostname and first FQDN label disagree.
    FqdnMismatch,
    InvalidMac,
    /// No explicit device type and no keyword matched.
    UnclassifiedDevice,
    /// Site value not covered by the alias table.
    UnknownSite,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::InvalidIp => "invalid_ip",
            IssueKind::ReservedEdge => "reserved_edge",
            IssueKind::InvalidHostname => "invalid_hostname",
            IssueKind::InvalidFqdn => "invalid_fqdn",
            IssueKind::FqdnMismatch => "fqdn_mismatch",
            IssueKind::InvalidMac => "invalid_mac",
            IssueKind::UnclassifiedDevice => "unclassified_device",
            IssueKind::UnknownSite => "unknown_site",
        }
    }

    /// Fixed remediation hint emitted with every anomaly of this kind.
    pub fn recommended_action(self) -> &'static str {
        match self {
            IssueKind::Missing => "Supply the missing value or mark record for review",
            IssueKind::InvalidIp => "Correct IP or mark record for manual review",
            IssueKind::ReservedEdge => {
                "Confirm the address is a host, not a network or broadcast address"
            }
            IssueKind::InvalidHostname => "Adjust hostname to RFC-compliant label",
            IssueKind::InvalidFqdn => "Provide valid FQDN or clear the field",
            IssueKind::FqdnMismatch => "Align hostname with the first FQDN label",
            IssueKind::InvalidMac => "Fix MAC address to 12 hex digits",
            IssueKind::UnclassifiedDevice => "Confirm device type",
            IssueKind::UnknownSite => "Map site to a canonical site code",
        }
    }
}

/// An issue raised by a normalizer before it knows which row it belongs to.
///
/// The row orchestrator tags these with the row id to produce [`Anomaly`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub kind: IssueKind,
    /// The offending raw value, verbatim.
    pub value: String,
}

impl FieldIssue {
    pub fn new(field: Field, kind: IssueKind, value: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn into_anomaly(self, row_id: &str) -> Anomaly {
        Anomaly {
            row_id: row_id.to_string(),
            field: self.field,
            issue_type: self.kind,
            value: self.value,
            recommended_action: self.kind.recommended_action().to_string(),
        }
    }
}

/// One entry of the anomaly report. Many anomalies may reference the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub row_id: String,
    pub field: Field,
    pub issue_type: IssueKind,
    pub value: String,
    pub recommended_action: String,
}

/// The aggregated anomaly report for a full run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnomalyReport {
    pub anomalies: Vec<Anomaly>,
}

impl AnomalyReport {
    pub fn len(&self) -> usize {
        self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }

    pub fn push(&mut self, anomaly: Anomaly) {
        self.anomalies.push(anomaly);
    }

    pub fn extend(&mut self, anomalies: impl IntoIterator<Item = Anomaly>) {
        self.anomalies.extend(anomalies);
    }

    /// Number of distinct rows with at least one anomaly.
    pub fn rows_affected(&self) -> usize {
        self.anomalies
            .iter()
            .map(|a| a.row_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.anomalies
            .iter()
            .filter(|a| a.issue_type == kind)
            .count()
    }

    /// Per-kind counts in a stable order, for the run summary.
    pub fn counts_by_kind(&self) -> Vec<(IssueKind, usize)> {
        let kinds: BTreeSet<IssueKind> = self.anomalies.iter().map(|a| a.issue_type).collect();
        kinds
            .into_iter()
            .map(|kind| (kind, self.count_of(kind)))
            .collect()
    }
}
