//! IP address normalization.
//!
//! Accepts strict IPv4/IPv6 notation plus a relaxed dotted-quad form with
//! leading zeros, strips zone-id suffixes, assigns a default subnet by
//! address class, and flags reserved network/broadcast edges in private
//! ranges. Parse failures degrade to an anomaly, never an error.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use netinv_model::{Field, FieldIssue, IssueKind};

/// Values treated as "no IP recorded" rather than a parse failure.
const MISSING_SENTINELS: &[&str] = &["n/a", "na", "none"];

/// Result of normalizing one raw IP field.
#[derive(Debug, Clone, Default)]
pub struct IpOutcome {
    /// Canonical compressed form when valid, trimmed raw input otherwise.
    pub ip: String,
    pub valid: bool,
    pub version: Option<u8>,
    pub subnet_cidr: String,
    /// Parsed address, kept so the orchestrator can derive the reverse PTR.
    pub addr: Option<IpAddr>,
    pub steps: Vec<&'static str>,
    pub issues: Vec<FieldIssue>,
}

pub fn normalize_ip(raw: &str) -> IpOutcome {
    let mut out = IpOutcome::default();
    let trimmed = raw.trim();
    out.steps.push("ip_trim");
    out.ip = trimmed.to_string();

    if trimmed.is_empty() || MISSING_SENTINELS.contains(&trimmed.to_lowercase().as_str()) {
        out.steps.push("ip_missing");
        out.issues
            .push(FieldIssue::new(Field::Ip, IssueKind::Missing, trimmed));
        return out;
    }

    let mut candidate = trimmed;
    if let Some((addr_part, _zone)) = candidate.split_once('%') {
        candidate = addr_part;
        out.steps.push("ip_drop_zone");
    }

    let parsed = candidate.parse::<IpAddr>().ok().or_else(|| {
        parse_ipv4_relaxed(candidate).map(|v4| {
            out.steps.push("ip_parse_relaxed");
            IpAddr::V4(v4)
        })
    });

    let Some(addr) = parsed else {
        out.steps.push("ip_invalid_parse");
        out.issues
            .push(FieldIssue::new(Field::Ip, IssueKind::InvalidIp, trimmed));
        return out;
    };

    out.ip = addr.to_string();
    out.steps.push("ip_parse");
    out.steps.push("ip_normalize");
    out.valid = true;
    out.version = Some(match addr {
        IpAddr::V4(_) => 4,
        IpAddr::V6(_) => 6,
    });
    out.subnet_cidr = default_subnet(&addr);
    out.addr = Some(addr);

    if let IpAddr::V4(v4) = addr
        && v4.is_private()
    {
        let last_octet = v4.octets()[3];
        if last_octet == 0 || last_octet == 255 {
            out.steps.push("ip_reserved_edge");
            out.issues
                .push(FieldIssue::new(Field::Ip, IssueKind::ReservedEdge, trimmed));
        }
    }

    out
}

/// Dotted-quad parse that tolerates leading zeros (`192.168.010.005`).
///
/// Exactly four all-digit octets, each 0..=255. Signs, hex, and empty
/// octets are rejected.
fn parse_ipv4_relaxed(candidate: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0usize;
    for part in candidate.split('.') {
        if count == 4 || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u32 = part.parse().ok()?;
        if value > 255 {
            return None;
        }
        octets[count] = value as u8;
        count += 1;
    }
    (count == 4).then(|| Ipv4Addr::from(octets))
}

/// Default subnet assignment by address class.
///
/// RFC1918 gets a /24 on the address's own third octet; APIPA, loopback and
/// IPv6 link-local get their well-known blocks. Anything else stays
/// unspecified.
fn default_subnet(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => {
            let o = v4.octets();
            if v4.is_private() {
                format!("{}.{}.{}.0/24", o[0], o[1], o[2])
            } else if v4.is_link_local() {
                "169.254.0.0/16".to_string()
            } else if v4.is_loopback() {
                "127.0.0.0/8".to_string()
            } else {
                String::new()
            }
        }
        IpAddr::V6(v6) => {
            if v6.is_unicast_link_local() {
                let network = Ipv6Addr::from_bits(v6.to_bits() & (!0u128 << 64));
                format!("{network}/64")
            } else {
                String::new()
            }
        }
    }
}

/// Reverse-DNS pointer name for a parsed address.
///
/// IPv4 uses reversed octets under `in-addr.arpa`, IPv6 reversed nibbles
/// under `ip6.arpa`.
pub fn reverse_ptr(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => {
            let o = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa", o[3], o[2], o[1], o[0])
        }
        IpAddr::V6(v6) => {
            let hex = format!("{:032x}", v6.to_bits());
            let mut name = String::with_capacity(hex.len() * 2 + 8);
            for nibble in hex.chars().rev() {
                name.push(nibble);
                name.push('.');
            }
            name.push_str("ip6.arpa");
            name
        }
    }
}
