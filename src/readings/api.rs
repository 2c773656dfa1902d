use serde_json::Value;

use super::model::GlucoseReading;
use crate::core::client::constants::{DEXCOM_GLUCOSE_READINGS_ENDPOINT, MAX_MAX_COUNT, MAX_MINUTES};
use crate::core::wire::ReadingsBody;
use crate::core::{DexcomClient, DexcomError, net};

/// Fault codes the readings endpoint uses for an expired or unknown session.
const SESSION_FAULTS: [&str; 2] = ["SessionIdNotFound", "SessionNotValid"];

pub(super) fn fetch_readings(
    client: &DexcomClient,
    minutes: u32,
    max_count: u32,
) -> Result<Vec<GlucoseReading>, DexcomError> {
    validate(minutes, max_count)?;

    let url = client.endpoint(DEXCOM_GLUCOSE_READINGS_ENDPOINT)?;
    let body = ReadingsBody {
        session_id: client.session_id(),
        minutes,
        max_count,
    };

    let resp = net::post_json(client.http(), &url, &body).map_err(|e| match e {
        DexcomError::Vendor { code, message, .. } if SESSION_FAULTS.contains(&code.as_str()) => {
            DexcomError::Session(format!("{code}: {message}"))
        }
        other => other,
    })?;

    parse_readings(&resp)
}

/// A single bad record fails the whole batch.
pub(super) fn parse_readings(resp: &Value) -> Result<Vec<GlucoseReading>, DexcomError> {
    let records = resp.as_array().ok_or_else(|| {
        DexcomError::ResponseParse(format!("expected an array of readings, got {resp}"))
    })?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            GlucoseReading::from_json(record).map_err(|e| match e {
                DexcomError::MalformedReading(msg) => {
                    DexcomError::MalformedReading(format!("record {i}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

fn validate(minutes: u32, max_count: u32) -> Result<(), DexcomError> {
    if !(1..=MAX_MINUTES).contains(&minutes) {
        return Err(DexcomError::InvalidArgument(format!(
            "minutes must be in 1..={MAX_MINUTES}, got {minutes}"
        )));
    }
    if !(1..=MAX_MAX_COUNT).contains(&max_count) {
        return Err(DexcomError::InvalidArgument(format!(
            "max_count must be in 1..={MAX_MAX_COUNT}, got {max_count}"
        )));
    }
    Ok(())
}
