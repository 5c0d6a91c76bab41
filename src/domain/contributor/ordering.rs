//! Display order for contributor listings.
//!
//! Active contributors come first. Within the same activity status the
//! earliest `joined` date wins. Join dates that cannot be parsed sort after
//! every parseable date and fall back to comparing the raw strings (a missing
//! or non-string value counts as the smallest raw string), so the order stays
//! total and deterministic.

use super::entity::ContributorRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Parse a `joined` value into a UTC instant.
///
/// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates (midnight UTC) and
/// `YYYY-MM-DDTHH:MM:SS` timestamps without offset (read as UTC).
pub fn parse_joined(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn compare_joined(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_joined), b.and_then(parse_joined)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(&b),
    }
}

pub fn compare_contributors(a: &ContributorRecord, b: &ContributorRecord) -> Ordering {
    // `true` must come first, so compare b against a.
    b.is_active()
        .cmp(&a.is_active())
        .then_with(|| compare_joined(a.joined_str(), b.joined_str()))
}

/// Stable sort; records with equal keys keep their upstream order.
pub fn sort_contributors(records: &mut [ContributorRecord]) {
    records.sort_by(compare_contributors);
}
