//! Device-type classification.
//!
//! An explicit device type is trusted verbatim. Otherwise the hostname and
//! notes are scanned against a fixed keyword table in first-match precedence
//! order; rows with no match are classified `unknown` and flagged.

use netinv_model::{Confidence, Field, FieldIssue, IssueKind};

/// Keyword table checked in order; the first group with a hit wins.
///
/// Order is deliberate: specific hardware words before the broad
/// server-ish catch-alls.
const KEYWORD_TABLE: &[(&str, &[&str])] = &[
    ("printer", &["printer"]),
    ("switch", &["switch"]),
    ("router", &["router", "gateway", "gw"]),
    ("iot", &["cam", "iot"]),
    ("server", &["srv", "server", "db"]),
];

/// Fallback classification when nothing matches.
pub const UNKNOWN_DEVICE: &str = "unknown";

/// Result of classifying one row's device type.
#[derive(Debug, Clone)]
pub struct DeviceOutcome {
    pub device_type: String,
    pub confidence: Confidence,
    pub steps: Vec<&'static str>,
    pub issues: Vec<FieldIssue>,
}

pub fn classify_device(explicit: &str, hostname: &str, notes: &str) -> DeviceOutcome {
    let explicit = explicit.trim();
    if !explicit.is_empty() {
        return DeviceOutcome {
            device_type: explicit.to_lowercase(),
            confidence: Confidence::High,
            steps: vec!["device_from_input"],
            issues: Vec::new(),
        };
    }

    let hints = format!("{} {}", hostname.to_lowercase(), notes.to_lowercase());
    for (device, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|keyword| hints.contains(keyword)) {
            return DeviceOutcome {
                device_type: (*device).to_string(),
                confidence: Confidence::Medium,
                steps: vec!["device_inferred"],
                issues: Vec::new(),
            };
        }
    }

    DeviceOutcome {
        device_type: UNKNOWN_DEVICE.to_string(),
        confidence: Confidence::Low,
        steps: vec!["device_unclassified"],
        issues: vec![FieldIssue::new(
            Field::DeviceType,
            IssueKind::UnclassifiedDevice,
            hostname,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_is_trusted() {
        let out = classify_device("Server", "printer-3f", "");
        assert_eq!(out.device_type, "server");
        assert_eq!(out.confidence, Confidence::High);
        assert!(out.steps.contains(&"device_from_input"));
        assert!(out.issues.is_empty());
    }

    #[test]
    fn hostname_keyword_infers_type() {
        let out = classify_device("", "printer-3f", "");
        assert_eq!(out.device_type, "printer");
        assert_eq!(out.confidence, Confidence::Medium);
        assert!(out.steps.contains(&"device_inferred"));
    }

    #[test]
    fn gateway_in_notes_maps_to_router() {
        let out = classify_device("", "edge-gw", "edge gw");
        assert_eq!(out.device_type, "router");
        assert_eq!(out.confidence, Confidence::Medium);
    }

    #[test]
    fn first_match_precedence_holds() {
        // "switch" outranks the router group even when both appear.
        let out = classify_device("", "switch-gw-1", "");
        assert_eq!(out.device_type, "switch");
        // The iot group outranks the server group.
        let out = classify_device("", "cam-srv", "");
        assert_eq!(out.device_type, "iot");
    }

    #[test]
    fn db_hint_maps_to_server() {
        let out = classify_device("", "db-core-2", "");
        assert_eq!(out.device_type, "server");
    }

    #[test]
    fn no_match_is_unknown_low_with_anomaly() {
        let out = classify_device("", "kiosk-7", "lobby display");
        assert_eq!(out.device_type, UNKNOWN_DEVICE);
        assert_eq!(out.confidence, Confidence::Low);
        assert!(
            out.issues
                .iter()
                .any(|i| i.field == Field::DeviceType && i.kind == IssueKind::UnclassifiedDevice)
        );
    }
}
