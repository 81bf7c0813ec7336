//! MAC address normalization.
//!
//! Separator-agnostic: any mix of `:`, `-`, `.` and whitespace is accepted
//! as long as exactly 12 hex digits remain. Canonical form is lowercase,
//! colon-separated.

use netinv_model::{Field, FieldIssue, IssueKind};

const MAC_HEX_DIGITS: usize = 12;

/// Result of normalizing one raw MAC field.
#[derive(Debug, Clone, Default)]
pub struct MacOutcome {
    /// Canonical `aa:bb:cc:dd:ee:ff` when valid, trimmed raw input otherwise.
    pub mac: String,
    /// `None` when the field was empty.
    pub valid: Option<bool>,
    pub steps: Vec<&'static str>,
    pub issues: Vec<FieldIssue>,
}

pub fn normalize_mac(raw: &str) -> MacOutcome {
    let mut out = MacOutcome::default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        out.steps.push("mac_missing");
        return out;
    }

    out.steps.push("mac_trim");
    let hex: String = trimmed.chars().filter(char::is_ascii_hexdigit).collect();
    if hex.len() == MAC_HEX_DIGITS {
        out.steps.push("mac_hex_extract");
        out.steps.push("mac_normalize");
        let mut mac = String::with_capacity(17);
        for (i, c) in hex.chars().enumerate() {
            if i > 0 && i % 2 == 0 {
                mac.push(':');
            }
            mac.push(c.to_ascii_lowercase());
        }
        out.mac = mac;
        out.valid = Some(true);
    } else {
        out.mac = trimmed.to_string();
        out.valid = Some(false);
        out.issues
            .push(FieldIssue::new(Field::Mac, IssueKind::InvalidMac, trimmed));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_styles_all_normalize() {
        for raw in [
            "AA-BB-CC-DD-EE-FF",
            "aa:bb:cc:dd:ee:ff",
            "aabb.ccdd.eeff",
            "AABBCCDDEEFF",
            " aa bb cc dd ee ff ",
        ] {
            let out = normalize_mac(raw);
            assert_eq!(out.mac, "aa:bb:cc:dd:ee:ff", "raw: {raw:?}");
            assert_eq!(out.valid, Some(true));
            assert!(out.steps.contains(&"mac_normalize"));
            assert!(out.issues.is_empty());
        }
    }

    #[test]
    fn canonical_form_is_17_chars() {
        let out = normalize_mac("00-1A-2B-3C-4D-5E");
        assert_eq!(out.mac.len(), 17);
        assert_eq!(out.mac, "00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn wrong_digit_count_is_invalid() {
        for raw in ["AABBCC", "aa:bb:cc:dd:ee:ff:00", "zz:zz:zz:zz:zz:zz"] {
            let out = normalize_mac(raw);
            assert_eq!(out.valid, Some(false), "raw: {raw:?}");
            assert_eq!(out.mac, raw.trim());
            assert!(
                out.issues
                    .iter()
                    .any(|i| i.field == Field::Mac && i.kind == IssueKind::InvalidMac)
            );
        }
    }

    #[test]
    fn empty_field_is_not_an_anomaly() {
        let out = normalize_mac("   ");
        assert_eq!(out.mac, "");
        assert_eq!(out.valid, None);
        assert!(out.steps.contains(&"mac_missing"));
        assert!(out.issues.is_empty());
    }
}
