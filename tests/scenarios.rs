use std::sync::Arc;
use std::time::Duration;

use eventline::scenarios::{
    DownloadConfig, DownloadEvent, DownloadListener, DownloadManager, HeatSensor, SensorConfig,
    SensorEvent, Thermostat,
};
use eventline::{DownloadError, MemorySink, StatusSink, Tone};
use tokio_util::sync::CancellationToken;

const READINGS: &[f64] = &[
    16.0, 17.0, 16.5, 18.0, 19.0, 22.0, 24.0, 26.75, 28.7, 27.6, 26.0, 24.0, 22.0, 45.0, 68.0,
    86.0, 45.0,
];

#[tokio::test]
async fn full_reading_series_produces_expected_alerts() {
    let sink = Arc::new(MemorySink::new());
    let config = SensorConfig {
        tick: Duration::ZERO,
        ..SensorConfig::default()
    };
    let mut sensor = HeatSensor::new(config, sink.clone());
    let _thermostat = Thermostat::attach(&sensor, sink.clone());

    let run = sensor.run(READINGS, &CancellationToken::new()).await;
    assert_eq!(run.processed, READINGS.len());
    assert_eq!(run.reports.len(), 7);
    assert_eq!(run.failures(), 0);

    let alerts: Vec<(Tone, String)> = sink
        .entries()
        .into_iter()
        .filter(|(tone, _)| *tone != Tone::Plain)
        .collect();
    assert_eq!(
        alerts,
        vec![
            (Tone::Warning, "⚠ 28.7 Warning: Cooling ON".to_string()),
            (Tone::Warning, "⚠ 27.6 Warning: Cooling ON".to_string()),
            (Tone::Notice, "ℹ Temperature Normal: Cooling OFF".to_string()),
            (Tone::Warning, "⚠ 45 Warning: Cooling ON".to_string()),
            (Tone::Warning, "⚠ 68 Warning: Cooling ON".to_string()),
            (Tone::Alert, "🚨 Emergency: Device Shutdown".to_string()),
            (Tone::Warning, "⚠ 45 Warning: Cooling ON".to_string()),
        ]
    );
}

#[tokio::test]
async fn extra_sensor_subscriber_sees_reading_payload() {
    let sink = Arc::new(MemorySink::new());
    let config = SensorConfig {
        tick: Duration::ZERO,
        ..SensorConfig::default()
    };
    let mut sensor = HeatSensor::new(config, sink.clone());

    let seen = Arc::new(MemorySink::new());
    let seen_in = seen.clone();
    sensor
        .events()
        .subscribe_fn(SensorEvent::Emergency, "audit", move |s: &HeatSensor, r| {
            let level = s.config().emergency_level;
            seen_in.plain(&format!("{} >= {level}", r.temperature));
            Ok(())
        });

    let run = sensor.run(&[80.0, 10.0, 99.5], &CancellationToken::new()).await;
    assert_eq!(run.reports.len(), 2);
    assert_eq!(seen.lines(), vec!["80 >= 75", "99.5 >= 75"]);
}

#[tokio::test]
async fn download_runs_error_then_success() {
    let sink = Arc::new(MemorySink::new());
    let manager = DownloadManager::new(
        DownloadConfig {
            step_delay: Duration::ZERO,
            ..DownloadConfig::default()
        },
        sink.clone(),
    );
    let _listener = DownloadListener::attach(&manager, sink.clone());
    assert_eq!(manager.events().subscriber_count(&DownloadEvent::Progress), 1);

    let first = manager.start("http://example.com/error").await;
    assert!(matches!(first, Err(DownloadError::Unavailable { .. })));
    let reports = manager.start("http://example.com/main.csv").await.unwrap();
    assert_eq!(reports.len(), 3);

    let lines = sink.lines();
    assert_eq!(lines.iter().filter(|l| l.starts_with("Donwload progress")).count(), 1);
    assert_eq!(lines.iter().filter(|l| *l == "File downloading....").count(), 2);
    assert_eq!(lines.last().map(String::as_str), Some("Download Manager Stoped..!"));
}
