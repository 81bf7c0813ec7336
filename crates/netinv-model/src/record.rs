//! Input and output row types for the inventory cleaning pipeline.

use serde::{Deserialize, Serialize, Serializer};

/// One raw row of the source inventory table.
///
/// Every field is free text exactly as it appeared in the input; absent
/// columns deserialize to empty strings so partial exports still ingest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub source_row_id: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub fqdn: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub site: String,
}

/// Confidence attached to the device-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// One cleaned output row.
///
/// Field order here is the output CSV column order. Tri-state flags
/// (`hostname_valid`, `fqdn_consistent`, `mac_valid`) serialize as
/// `true`/`false` and stay empty when the source field was absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub ip: String,
    pub ip_valid: bool,
    pub ip_version: Option<u8>,
    pub subnet_cidr: String,
    pub hostname: String,
    pub hostname_valid: Option<bool>,
    pub fqdn: String,
    pub fqdn_consistent: Option<bool>,
    pub reverse_ptr: String,
    pub mac: String,
    pub mac_valid: Option<bool>,
    pub owner: String,
    pub owner_email: String,
    pub owner_team: String,
    pub device_type: String,
    pub device_type_confidence: Confidence,
    pub site: String,
    pub site_normalized: String,
    pub source_row_id: String,
    /// Ordered trace of the transforms applied to this row, one entry per
    /// normalization step. Append-only; serialized `|`-joined.
    #[serde(
        serialize_with = "join_steps",
        deserialize_with = "split_steps"
    )]
    pub normalization_steps: Vec<String>,
}

fn join_steps<S>(steps: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&steps.join("|"))
}

fn split_steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let joined = String::deserialize(deserializer)?;
    if joined.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(joined.split('|').map(str::to_string).collect())
    }
}
