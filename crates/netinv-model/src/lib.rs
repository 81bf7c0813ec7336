pub mod anomaly;
pub mod error;
pub mod record;

pub use anomaly::{Anomaly, AnomalyReport, Field, FieldIssue, IssueKind};
pub use error::{NetinvError, Result};
pub use record::{CleanedRecord, Confidence, RawRecord};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CleanedRecord {
        CleanedRecord {
            ip: "192.168.1.5".to_string(),
            ip_valid: true,
            ip_version: Some(4),
            subnet_cidr: "192.168.1.0/24".to_string(),
            hostname: "host1".to_string(),
            hostname_valid: Some(true),
            fqdn: "host1.example.com".to_string(),
            fqdn_consistent: Some(true),
            reverse_ptr: "5.1.168.192.in-addr.arpa".to_string(),
            mac: "aa:bb:cc:dd:ee:ff".to_string(),
            mac_valid: Some(true),
            owner: "Jane Doe".to_string(),
            owner_email: "jane.doe@example.com".to_string(),
            owner_team: "Netops".to_string(),
            device_type: "server".to_string(),
            device_type_confidence: Confidence::High,
            site: "HQ".to_string(),
            site_normalized: "HQ".to_string(),
            source_row_id: "row-1".to_string(),
            normalization_steps: vec!["ip_trim".to_string(), "ip_parse".to_string()],
        }
    }

    #[test]
    fn cleaned_record_steps_round_trip_joined() {
        let record = sample_record();
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["normalization_steps"], "ip_trim|ip_parse");
        let round: CleanedRecord = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round.normalization_steps, record.normalization_steps);
    }

    #[test]
    fn issue_kinds_use_snake_case_on_the_wire() {
        let json = serde_json::to_string(&IssueKind::FqdnMismatch).unwrap();
        assert_eq!(json, "\"fqdn_mismatch\"");
        let json = serde_json::to_string(&Field::DeviceType).unwrap();
        assert_eq!(json, "\"device_type\"");
    }

    #[test]
    fn report_counts() {
        let mut report = AnomalyReport::default();
        report.push(FieldIssue::new(Field::Ip, IssueKind::InvalidIp, "10.0.1.300").into_anomaly("r1"));
        report.push(FieldIssue::new(Field::Mac, IssueKind::InvalidMac, "AABBCC").into_anomaly("r1"));
        report.push(FieldIssue::new(Field::Site, IssueKind::UnknownSite, "MOON").into_anomaly("r2"));

        assert_eq!(report.len(), 3);
        assert_eq!(report.rows_affected(), 2);
        assert_eq!(report.count_of(IssueKind::InvalidIp), 1);
        assert_eq!(report.counts_by_kind().len(), 3);
    }

    #[test]
    fn anomaly_carries_recommended_action() {
        let anomaly = FieldIssue::new(Field::Mac, IssueKind::InvalidMac, "junk").into_anomaly("r9");
        assert_eq!(anomaly.row_id, "r9");
        assert_eq!(anomaly.recommended_action, "Fix MAC address to 12 hex digits");
        let json = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(json["issue_type"], "invalid_mac");
    }
}
