//! dexcom-share: blocking client for the Dexcom Share API.
//!
//! Logs in with Share credentials (account name → account id → session id) and fetches recent
//! glucose values, converted to mmol/L and annotated with a trend arrow.
//!
//! ```no_run
//! use dexcom_share::DexcomClient;
//!
//! let client = DexcomClient::new("username", "password", false)?;
//! let reading = client.get_latest_glucose_reading()?;
//! println!(
//!     "{} mg/dL ({} mmol/L) {}",
//!     reading.mg_dl(),
//!     reading.mmol_l(),
//!     reading.trend_arrow().unwrap_or("")
//! );
//! # Ok::<(), dexcom_share::DexcomError>(())
//! ```

pub mod core;
pub mod readings;

pub use crate::core::client::constants::{
    DEFAULT_SESSION_ID, DEXCOM_APPLICATION_ID, MAX_MAX_COUNT, MAX_MINUTES,
};
pub use crate::core::{
    DexcomClient, DexcomClientBuilder, DexcomError, Region, convert_to_mmol, trend_arrow,
};
pub use readings::GlucoseReading;

/// Install a `tracing` fmt subscriber honoring `RUST_LOG`. Dev-only convenience for demos and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
