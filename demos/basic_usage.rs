//! Print the latest reading and the last hour of values.
//!
//!   DEXCOM_USERNAME=... DEXCOM_PASSWORD=... [DEXCOM_OUS=1] cargo run --example basic_usage
//!
//! With `--features tracing-subscriber`, `RUST_LOG=dexcom_share=debug` shows each request.

use dexcom_share::{DexcomClient, DexcomError, Region};
use std::env;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    dexcom_share::init_tracing();

    let username = env::var("DEXCOM_USERNAME")?;
    let password = env::var("DEXCOM_PASSWORD")?;
    let region = Region::from_ous_flag(env::var("DEXCOM_OUS").ok().as_deref() == Some("1"));

    let client = DexcomClient::builder()
        .credentials(username, password)
        .region(region)
        .timeout(Duration::from_secs(15))
        .build()?;

    match client.get_latest_glucose_reading() {
        Ok(r) => println!(
            "Latest: {} mg/dL | {:.1} mmol/L {} ({})",
            r.mg_dl(),
            r.mmol_l(),
            r.trend_arrow().unwrap_or(""),
            r.timestamp()
                .map_or_else(|| "unknown time".to_string(), |t| t.to_rfc3339()),
        ),
        Err(DexcomError::NoReadingsAvailable) => println!("No readings in the last 24 hours."),
        Err(e) => return Err(e.into()),
    }

    println!("\nLast hour:");
    for r in client.get_glucose_readings(60, 12)? {
        println!(
            "  {:>3} mg/dL  {:>4.1} mmol/L  {}",
            r.mg_dl(),
            r.mmol_l(),
            r.trend_arrow().unwrap_or(" ")
        );
    }

    Ok(())
}
