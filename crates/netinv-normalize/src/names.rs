//! Hostname and FQDN normalization.
//!
//! Lowercases both names, validates DNS labels, derives a missing hostname
//! from the FQDN's first label, and checks hostname/FQDN consistency.

use netinv_model::{Field, FieldIssue, IssueKind};

/// Longest allowed DNS label.
const MAX_LABEL_LEN: usize = 63;
/// Longest allowed full domain name.
const MAX_NAME_LEN: usize = 253;

/// Result of normalizing the hostname/FQDN pair.
#[derive(Debug, Clone, Default)]
pub struct NameOutcome {
    pub hostname: String,
    /// `None` when no hostname was present or derivable.
    pub hostname_valid: Option<bool>,
    pub fqdn: String,
    /// `None` unless both hostname and FQDN ended up populated.
    pub fqdn_consistent: Option<bool>,
    pub steps: Vec<&'static str>,
    pub issues: Vec<FieldIssue>,
}

pub fn normalize_names(hostname_raw: &str, fqdn_raw: &str) -> NameOutcome {
    let mut out = NameOutcome::default();

    let mut hostname = String::new();
    if !hostname_raw.trim().is_empty() {
        out.steps.push("hostname_trim");
        hostname = hostname_raw.trim().to_lowercase();
        out.steps.push("hostname_lower");
        let valid = valid_label(&hostname);
        out.hostname_valid = Some(valid);
        if !valid {
            out.issues.push(FieldIssue::new(
                Field::Hostname,
                IssueKind::InvalidHostname,
                hostname_raw.trim(),
            ));
        }
    }

    let mut fqdn = String::new();
    let mut fqdn_valid = false;
    if !fqdn_raw.trim().is_empty() {
        out.steps.push("fqdn_trim");
        fqdn = fqdn_raw.trim().to_lowercase();
        out.steps.push("fqdn_lower");
        let labels: Vec<&str> = fqdn.split('.').collect();
        fqdn_valid = labels.len() >= 2
            && fqdn.len() <= MAX_NAME_LEN
            && labels.iter().all(|label| valid_label(label));
        if !fqdn_valid {
            out.issues.push(FieldIssue::new(
                Field::Fqdn,
                IssueKind::InvalidFqdn,
                fqdn_raw.trim(),
            ));
        }
    }

    if hostname.is_empty() && fqdn_valid {
        hostname = first_label(&fqdn).to_string();
        out.hostname_valid = Some(true);
        out.steps.push("hostname_from_fqdn");
    }

    if !hostname.is_empty() && !fqdn.is_empty() {
        if fqdn_valid {
            let consistent = hostname == first_label(&fqdn);
            out.fqdn_consistent = Some(consistent);
            if !consistent {
                out.issues.push(FieldIssue::new(
                    Field::Fqdn,
                    IssueKind::FqdnMismatch,
                    fqdn_raw.trim(),
                ));
            }
        } else {
            out.fqdn_consistent = Some(false);
        }
    }

    out.hostname = hostname;
    out.fqdn = fqdn;
    out
}

fn first_label(fqdn: &str) -> &str {
    fqdn.split('.').next().unwrap_or(fqdn)
}

/// A valid DNS label: 1-63 chars, alphanumeric plus interior hyphens.
fn valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LEN {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
}
