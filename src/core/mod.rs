//! Core components of the `dexcom-share` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`DexcomClient`] and its builder.
//! - The primary [`DexcomError`] type.
//! - The [`Region`] selector and the unit/trend conversions.
//! - Internal networking and login logic.

/// The main client (`DexcomClient`), builder, login, and endpoint constants.
pub mod client;
/// mg/dL → mmol/L conversion and trend-arrow lookup.
pub mod conversions;
/// The primary error type (`DexcomError`) for the crate.
pub mod error;
/// Shared data models (e.g., `Region`).
pub mod models;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::DexcomClient`
pub use client::{DexcomClient, DexcomClientBuilder};
pub use conversions::{convert_to_mmol, trend_arrow};
pub use error::DexcomError;
pub use models::Region;
