//! Site normalization.
//!
//! Folds separator and case noise out of the raw site value, then maps it
//! through a fixed alias table to a canonical site code. Unmapped values
//! pass through uppercased and are flagged.

use std::collections::HashMap;
use std::sync::LazyLock;

use netinv_model::{Field, FieldIssue, IssueKind};

/// Alias table keyed by folded lookup key.
///
/// Canonical codes fold back onto themselves, so normalization is
/// idempotent.
static SITE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("blr campus", "BLR CAMPUS"),
        ("blr", "BLR CAMPUS"),
        ("hq bldg 1", "HQ BLDG 1"),
        ("hq building 1", "HQ BLDG 1"),
        ("hq", "HQ"),
        ("lab 1", "LAB 1"),
        ("dc 1", "DC 1"),
    ])
});

/// Result of normalizing one raw site field.
#[derive(Debug, Clone, Default)]
pub struct SiteOutcome {
    /// Trimmed raw value, preserved for the output row.
    pub site: String,
    /// Canonical site code, or the uppercased folded value when unmapped.
    pub site_normalized: String,
    pub steps: Vec<&'static str>,
    pub issues: Vec<FieldIssue>,
}

pub fn normalize_site(raw: &str) -> SiteOutcome {
    let trimmed = raw.trim();
    let mut out = SiteOutcome {
        site: trimmed.to_string(),
        ..SiteOutcome::default()
    };
    if trimmed.is_empty() || matches!(trimmed.to_lowercase().as_str(), "n/a" | "na") {
        return out;
    }

    out.steps.push("site_trim");
    let key = fold_key(trimmed);
    match SITE_ALIASES.get(key.as_str()) {
        Some(canonical) => out.site_normalized = (*canonical).to_string(),
        None => {
            out.site_normalized = key.to_uppercase();
            out.issues
                .push(FieldIssue::new(Field::Site, IssueKind::UnknownSite, trimmed));
        }
    }
    out.steps.push("site_normalize");
    out
}

/// Lowercase, turn `-`/`_` into spaces, collapse whitespace runs.
fn fold_key(site: &str) -> String {
    site.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
