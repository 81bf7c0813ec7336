//! Row orchestration.
//!
//! Runs every field normalizer over one raw record and merges the outcomes
//! into a cleaned record plus anomalies tagged with the row id. Rows are
//! independent; per-field failures never abort the row.

use std::collections::HashSet;

use tracing::debug;

use netinv_model::{Anomaly, CleanedRecord, FieldIssue, RawRecord};

use crate::{device, ip, mac, names, owner, site};

pub fn clean_row(raw: &RawRecord) -> (CleanedRecord, Vec<Anomaly>) {
    let ip_out = ip::normalize_ip(&raw.ip);
    let names_out = names::normalize_names(&raw.hostname, &raw.fqdn);
    let reverse_ptr = ip_out.addr.map(|addr| ip::reverse_ptr(&addr));
    let mac_out = mac::normalize_mac(&raw.mac);
    let owner_out = owner::parse_owner(&raw.owner);
    let device_out = device::classify_device(&raw.device_type, &names_out.hostname, &raw.notes);
    let site_out = site::normalize_site(&raw.site);

    let mut steps: Vec<&'static str> = Vec::new();
    steps.extend(ip_out.steps);
    steps.extend(names_out.steps);
    if reverse_ptr.is_some() {
        steps.push("reverse_ptr_build");
    }
    steps.extend(mac_out.steps);
    steps.extend(owner_out.steps);
    steps.extend(device_out.steps);
    steps.extend(site_out.steps);

    let mut issues: Vec<FieldIssue> = Vec::new();
    issues.extend(ip_out.issues);
    issues.extend(names_out.issues);
    issues.extend(mac_out.issues);
    issues.extend(device_out.issues);
    issues.extend(site_out.issues);

    let record = CleanedRecord {
        ip: ip_out.ip,
        ip_valid: ip_out.valid,
        ip_version: ip_out.version,
        subnet_cidr: ip_out.subnet_cidr,
        hostname: names_out.hostname,
        hostname_valid: names_out.hostname_valid,
        fqdn: names_out.fqdn,
        fqdn_consistent: names_out.fqdn_consistent,
        reverse_ptr: reverse_ptr.unwrap_or_default(),
        mac: mac_out.mac,
        mac_valid: mac_out.valid,
        owner: owner_out.name,
        owner_email: owner_out.email,
        owner_team: owner_out.team,
        device_type: device_out.device_type,
        device_type_confidence: device_out.confidence,
        site: site_out.site,
        site_normalized: site_out.site_normalized,
        source_row_id: raw.source_row_id.clone(),
        normalization_steps: uniq(steps),
    };

    let anomalies: Vec<Anomaly> = issues
        .into_iter()
        .map(|issue| issue.into_anomaly(&record.source_row_id))
        .collect();

    debug!(
        row_id = %record.source_row_id,
        anomalies = anomalies.len(),
        steps = record.normalization_steps.len(),
        "row cleaned"
    );
    (record, anomalies)
}

/// Order-preserving dedup of the step trace.
fn uniq(steps: Vec<&'static str>) -> Vec<String> {
    let mut seen = HashSet::new();
    steps
        .into_iter()
        .filter(|step| !step.is_empty() && seen.insert(*step))
        .map(str::to_string)
        .collect()
}
