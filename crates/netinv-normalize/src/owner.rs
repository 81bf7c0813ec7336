//! Owner field parsing.
//!
//! The owner column is free text mixing a human name, an optional
//! parenthesized team, and an optional email. Extraction is positional:
//! first email-shaped substring, first parenthesized group, remainder is
//! the name. Nothing here raises anomalies.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static TEAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid team regex"));

/// Result of parsing one raw owner field.
#[derive(Debug, Clone, Default)]
pub struct OwnerOutcome {
    /// Title-cased human name, possibly derived from the email local part.
    pub name: String,
    /// Lowercased email, empty if none found.
    pub email: String,
    /// Team text from parentheses, verbatim apart from trimming.
    pub team: String,
    pub steps: Vec<&'static str>,
}

pub fn parse_owner(raw: &str) -> OwnerOutcome {
    let mut out = OwnerOutcome::default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return out;
    }
    out.steps.push("owner_trim");

    let mut rest = trimmed.to_string();
    if let Some(range) = EMAIL_RE.find(&rest).map(|m| m.range()) {
        out.email = rest[range.clone()].to_lowercase();
        rest.replace_range(range, "");
        out.steps.push("owner_email_extract");
    }

    if let Some((range, team)) = TEAM_RE
        .captures(&rest)
        .map(|caps| (caps.get(0).map_or(0..0, |m| m.range()), caps[1].trim().to_string()))
    {
        out.team = team;
        rest.replace_range(range, "");
        out.steps.push("owner_team_paren");
    }

    let name = rest.trim();
    if name.is_empty() {
        if let Some(local) = out.email.split('@').next().filter(|l| !l.is_empty()) {
            out.name = title_case(&local.replace(['.', '_'], " "));
            out.steps.push("owner_from_email_localpart");
        }
    } else {
        out.name = title_case(name);
    }
    out
}

/// Capitalize each whitespace-separated word, lowercasing the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
