use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::types::metro_service_error::MetroServiceError;

// Millisecond epoch followed by a signed UTC offset, usually wrapped as
// "/Date(1400000000000-0500)/". Either offset sign is accepted and the closing
// paren is required, so a truncated value never parses.
static EMBEDDED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Date\(([0-9]{13})[+-][0-9]{4}\)").expect("valid pattern"));

/// Decodes a NexTrip `Date(...)` string into a whole-second instant.
///
/// The millisecond value is truncated to seconds. The offset suffix has to be
/// present but is not applied: the epoch value is already UTC.
pub fn parse_embedded_date(raw: &str) -> Result<DateTime<Utc>, MetroServiceError> {
    let malformed = || MetroServiceError::MalformedTimestamp(raw.to_string());

    let millis: i64 = EMBEDDED_DATE
        .captures(raw)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(malformed)?;

    DateTime::<Utc>::from_timestamp(millis / 1000, 0).ok_or_else(malformed)
}
