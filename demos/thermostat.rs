//! # Thermostat Demo
//!
//! A heat sensor replays a fixed series of readings, one per second; a
//! thermostat turns cooling on at 27° and reports an emergency at 75°.
//! Ctrl-C stops the run early.
//!
//! ## Run
//! ```bash
//! cargo run --example thermostat
//! RUST_LOG=eventline=debug cargo run --example thermostat   # show threshold crossings
//! ```

use std::sync::Arc;

use eventline::scenarios::{HeatSensor, SensorConfig, Thermostat};
use eventline::{ConsoleSink, cancel_on_signal};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

const READINGS: &[f64] = &[
    16.0, 17.0, 16.5, 18.0, 19.0, 22.0, 24.0, 26.75, 28.7, 27.6, 26.0, 24.0, 22.0, 45.0, 68.0,
    86.0, 45.0,
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("eventline=warn".parse()?))
        .init();

    let sink = Arc::new(ConsoleSink::new());
    let mut sensor = HeatSensor::new(SensorConfig::default(), sink.clone());
    let _thermostat = Thermostat::attach(&sensor, sink);

    let token = CancellationToken::new();
    let watcher = cancel_on_signal(token.clone());

    let run = sensor.run(READINGS, &token).await;
    token.cancel();
    watcher.await?;

    println!();
    println!("Processed {}/{} readings", run.processed, READINGS.len());
    if run.failures() > 0 {
        tracing::warn!(failures = run.failures(), "some subscribers failed");
    }
    Ok(())
}
