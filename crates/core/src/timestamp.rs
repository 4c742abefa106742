//! `CreatedAt` timestamp handling.
//!
//! Timestamps are naive UTC date-times at microsecond precision, rendered as
//! `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`. The fraction appears only when non-zero.

use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::error::SeedError;

/// Current UTC time, truncated to microseconds.
pub fn now_utc() -> Result<PrimitiveDateTime, SeedError> {
    let now = OffsetDateTime::now_utc();
    truncate_to_micros(PrimitiveDateTime::new(now.date(), now.time()))
}

/// Parse `YYYY-MM-DDTHH:MM:SS[.fraction][Z]` as a UTC date-time.
pub fn parse_base_time(s: &str) -> Result<PrimitiveDateTime, SeedError> {
    let trimmed = s.trim();
    let naive = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);
    let input = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    let parsed = PrimitiveDateTime::parse(naive, input)
        .map_err(|e| SeedError::Timestamp(format!("cannot parse '{}': {}", s, e)))?;
    truncate_to_micros(parsed)
}

/// `base + offset_secs` seconds.
pub fn offset_seconds(
    base: PrimitiveDateTime,
    offset_secs: usize,
) -> Result<PrimitiveDateTime, SeedError> {
    let secs = i64::try_from(offset_secs)
        .map_err(|_| SeedError::Timestamp(format!("offset {}s out of range", offset_secs)))?;
    base.checked_add(Duration::seconds(secs)).ok_or_else(|| {
        SeedError::Timestamp(format!("{} + {}s is out of range", base, offset_secs))
    })
}

/// Render as ISO-8601 with a literal `Z` suffix.
pub fn format_created_at(at: PrimitiveDateTime) -> Result<String, SeedError> {
    let formatted = if at.microsecond() == 0 {
        at.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
    } else {
        at.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]"
        ))
    };
    let mut out = formatted.map_err(|e| SeedError::Timestamp(e.to_string()))?;
    out.push('Z');
    Ok(out)
}

fn truncate_to_micros(at: PrimitiveDateTime) -> Result<PrimitiveDateTime, SeedError> {
    at.replace_microsecond(at.microsecond())
        .map_err(|e| SeedError::Timestamp(e.to_string()))
}
