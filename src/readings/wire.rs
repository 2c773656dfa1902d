use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One element of the `ReadPublisherLatestGlucoseValues` array.
///
/// The service also sends `ST`/`DT` timestamps; only `WT` is kept.
#[derive(Deserialize, Debug)]
pub(crate) struct RawReading {
    #[serde(rename = "Value")]
    pub(crate) value: i32,
    #[serde(rename = "Trend")]
    pub(crate) trend: String,
    #[serde(rename = "WT", default)]
    pub(crate) wt: Option<String>,
}

/// Parse a .NET JSON date, `Date(<epoch millis>)` with an optional `±hhmm` suffix.
/// The millis are already UTC; the suffix only records the device's local offset.
pub(crate) fn parse_share_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let raw = raw
        .strip_prefix('/')
        .and_then(|r| r.strip_suffix('/'))
        .unwrap_or(raw);
    let inner = raw.strip_prefix("Date(")?.strip_suffix(')')?;

    let (millis, offset) = match inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| matches!(c, '+' | '-'))
    {
        Some((i, _)) => (&inner[..i], Some(&inner[i + 1..])),
        None => (inner, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(millis.strip_prefix('-').unwrap_or(millis))
        || offset.is_some_and(|o| o.len() != 4 || !all_digits(o))
    {
        return None;
    }

    let millis: i64 = millis.parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}
