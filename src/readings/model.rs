use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire::{RawReading, parse_share_date};
use crate::core::{DexcomError, convert_to_mmol, trend_arrow};

/// A single glucose observation.
///
/// mmol/L and the trend arrow are derived from the raw record at construction and the value
/// is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlucoseReading {
    value: i32,
    mg_dl: i32,
    mmol_l: f64,
    trend: String,
    trend_arrow: Option<&'static str>,
    timestamp: Option<DateTime<Utc>>,
}

impl GlucoseReading {
    /// Build a reading from one element of the readings response.
    ///
    /// # Errors
    ///
    /// Returns [`DexcomError::MalformedReading`] if `Value` is missing or not an integer,
    /// `Trend` is missing or not a string, or `WT` is present but not a Share date.
    pub fn from_json(record: &Value) -> Result<Self, DexcomError> {
        let raw = RawReading::deserialize(record)
            .map_err(|e| DexcomError::MalformedReading(e.to_string()))?;

        let timestamp = match raw.wt.as_deref() {
            None => None,
            Some(wt) => Some(parse_share_date(wt).ok_or_else(|| {
                DexcomError::MalformedReading(format!("unrecognized WT timestamp {wt:?}"))
            })?),
        };

        Ok(Self::from_parts(raw.value, raw.trend, timestamp))
    }

    fn from_parts(value: i32, trend: String, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            value,
            mg_dl: value,
            mmol_l: convert_to_mmol(value),
            trend_arrow: trend_arrow(&trend),
            trend,
            timestamp,
        }
    }

    /// Raw value as returned by the service (mg/dL).
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn mg_dl(&self) -> i32 {
        self.mg_dl
    }

    /// Value in mmol/L, rounded to one decimal.
    pub fn mmol_l(&self) -> f64 {
        self.mmol_l
    }

    /// Dexcom trend code, e.g. `FortyFiveUp`.
    pub fn trend(&self) -> &str {
        &self.trend
    }

    /// Arrow glyph for the trend, or `None` for an unrecognized code.
    pub fn trend_arrow(&self) -> Option<&'static str> {
        self.trend_arrow
    }

    /// When the reading was taken (`WT`), if the service included it.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}
