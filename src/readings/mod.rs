//! Glucose readings: the readings endpoint and the [`GlucoseReading`] model.

mod api;
mod model;
mod wire;

pub use model::GlucoseReading;

use crate::core::{DexcomClient, DexcomError};

impl DexcomClient {
    /// Fetches up to `max_count` readings from the last `minutes` minutes, newest first.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DexcomError::InvalidArgument`] if `minutes` is outside `1..=1440` or
    /// `max_count` outside `1..=288`, [`DexcomError::Session`] if the service rejects the
    /// session, [`DexcomError::MalformedReading`] if any record lacks `Value` or `Trend`, and
    /// transport or parse errors if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn get_glucose_readings(
        &self,
        minutes: u32,
        max_count: u32,
    ) -> Result<Vec<GlucoseReading>, DexcomError> {
        api::fetch_readings(self, minutes, max_count)
    }

    /// Fetches the most recent reading from the last 24 hours.
    ///
    /// # Errors
    ///
    /// Returns [`DexcomError::NoReadingsAvailable`] if there is none, plus any error from
    /// [`get_glucose_readings`](Self::get_glucose_readings).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn get_latest_glucose_reading(&self) -> Result<GlucoseReading, DexcomError> {
        first(self.get_glucose_readings(1440, 1)?)
    }

    /// Fetches the most recent reading from the last 10 minutes.
    ///
    /// # Errors
    ///
    /// Returns [`DexcomError::NoReadingsAvailable`] if there is none, plus any error from
    /// [`get_glucose_readings`](Self::get_glucose_readings).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn get_current_glucose_reading(&self) -> Result<GlucoseReading, DexcomError> {
        first(self.get_glucose_readings(10, 1)?)
    }
}

fn first(readings: Vec<GlucoseReading>) -> Result<GlucoseReading, DexcomError> {
    readings
        .into_iter()
        .next()
        .ok_or(DexcomError::NoReadingsAvailable)
}
