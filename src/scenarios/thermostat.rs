//! # Temperature-threshold monitor.
//!
//! [`HeatSensor`] walks a sequence of readings and publishes a [`SensorEvent`]
//! when a reading crosses a threshold. The transition rules live in
//! [`ThresholdTracker`]; the dispatch core knows nothing about them.
//!
//! ## Transitions
//! ```text
//! t >= emergency_level            ─► Emergency   (warning flag untouched)
//! t >= warning_level              ─► Warning     (flag set)
//! t <  warning_level, flag set    ─► Normal      (flag cleared)
//! t <  warning_level, flag clear  ─► (nothing)
//! ```

use std::time::{Duration, SystemTime};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::dispatch::{DispatchReport, HandlerRef, Registry};
use crate::sinks::{SinkRef, Tone};

/// Events published by [`HeatSensor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorEvent {
    /// Reading reached the warning level.
    Warning,
    /// Reading reached the emergency level.
    Emergency,
    /// Reading dropped below the warning level after a warning.
    Normal,
}

/// Payload of every [`SensorEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    /// Measured temperature.
    pub temperature: f64,
    /// Wall-clock time of the reading.
    pub at: SystemTime,
}

/// Settings for [`HeatSensor`].
#[derive(Clone, Debug)]
pub struct SensorConfig {
    /// Readings at or above this raise [`SensorEvent::Warning`].
    pub warning_level: f64,
    /// Readings at or above this raise [`SensorEvent::Emergency`].
    pub emergency_level: f64,
    /// Pause between readings.
    pub tick: Duration,
}

impl Default for SensorConfig {
    /// Default configuration:
    ///
    /// - `warning_level = 27.0`
    /// - `emergency_level = 75.0`
    /// - `tick = 1s`
    fn default() -> Self {
        Self {
            warning_level: 27.0,
            emergency_level: 75.0,
            tick: Duration::from_secs(1),
        }
    }
}

/// Threshold state machine of the heat sensor.
#[derive(Debug, Clone)]
pub struct ThresholdTracker {
    warning_level: f64,
    emergency_level: f64,
    was_warning: bool,
}

impl ThresholdTracker {
    /// Creates a tracker using the levels of `config`, starting outside the warning band.
    pub fn new(config: &SensorConfig) -> Self {
        Self {
            warning_level: config.warning_level,
            emergency_level: config.emergency_level,
            was_warning: false,
        }
    }

    /// Classifies one reading, updating the warning flag.
    pub fn classify(&mut self, temperature: f64) -> Option<SensorEvent> {
        if temperature >= self.emergency_level {
            Some(SensorEvent::Emergency)
        } else if temperature >= self.warning_level {
            self.was_warning = true;
            Some(SensorEvent::Warning)
        } else if self.was_warning {
            self.was_warning = false;
            Some(SensorEvent::Normal)
        } else {
            None
        }
    }

    /// True while the last non-emergency reading was a warning.
    pub fn is_warning(&self) -> bool {
        self.was_warning
    }
}

/// Publisher of [`SensorEvent`]s.
pub struct HeatSensor {
    events: Registry<SensorEvent, HeatSensor, TemperatureReading>,
    config: SensorConfig,
    tracker: ThresholdTracker,
    sink: SinkRef,
}

impl HeatSensor {
    /// Creates a sensor writing its own status lines to `sink`.
    pub fn new(config: SensorConfig, sink: SinkRef) -> Self {
        Self {
            events: Registry::new(),
            tracker: ThresholdTracker::new(&config),
            config,
            sink,
        }
    }

    /// Subscriber registry; thermostats attach here.
    pub fn events(&self) -> &Registry<SensorEvent, HeatSensor, TemperatureReading> {
        &self.events
    }

    /// Returns the sensor configuration.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// True while the sensor is in the warning band.
    pub fn is_warning(&self) -> bool {
        self.tracker.is_warning()
    }

    /// Processes `readings` in order, one per `tick`, until done or `ctx` is cancelled.
    pub async fn run(&mut self, readings: &[f64], ctx: &CancellationToken) -> SensorRun {
        let mut run = SensorRun::default();

        for &temperature in readings {
            if ctx.is_cancelled() {
                break;
            }
            self.sink.plain(&format!("Temperature: {temperature}"));

            let reading = TemperatureReading {
                temperature,
                at: SystemTime::now(),
            };
            if let Some(event) = self.tracker.classify(temperature) {
                debug!(?event, temperature, "threshold crossed");
                run.reports.push(self.events.fire(event, &*self, &reading));
            }
            run.processed += 1;

            tokio::select! {
                _ = ctx.cancelled() => break,
                _ = tokio::time::sleep(self.config.tick) => {}
            }
        }
        run
    }
}

/// Outcome of [`HeatSensor::run`].
#[derive(Debug, Default)]
pub struct SensorRun {
    /// Readings processed before the series ended or the run was cancelled.
    pub processed: usize,
    /// One report per threshold event fired, in firing order.
    pub reports: Vec<DispatchReport<SensorEvent>>,
}

impl SensorRun {
    /// Total subscriber failures across every event fired.
    pub fn failures(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }
}

/// Subscriber that switches cooling on and off in response to a [`HeatSensor`].
pub struct Thermostat {
    handlers: Vec<(SensorEvent, HandlerRef<HeatSensor, TemperatureReading>)>,
}

impl Thermostat {
    /// Subscribes to warning, emergency and normal events of `sensor`.
    pub fn attach(sensor: &HeatSensor, sink: SinkRef) -> Self {
        let events = sensor.events();
        let mut handlers = Vec::with_capacity(3);

        let s = sink.clone();
        handlers.push((
            SensorEvent::Warning,
            events.subscribe_fn(SensorEvent::Warning, "thermostat-warning", move |_, r| {
                s.emit(
                    Tone::Warning,
                    &format!("⚠ {} Warning: Cooling ON", r.temperature),
                );
                Ok(())
            }),
        ));

        let s = sink.clone();
        handlers.push((
            SensorEvent::Emergency,
            events.subscribe_fn(SensorEvent::Emergency, "thermostat-emergency", move |_, _| {
                s.emit(Tone::Alert, "🚨 Emergency: Device Shutdown");
                Ok(())
            }),
        ));

        handlers.push((
            SensorEvent::Normal,
            events.subscribe_fn(SensorEvent::Normal, "thermostat-normal", move |_, _| {
                sink.emit(Tone::Notice, "ℹ Temperature Normal: Cooling OFF");
                Ok(())
            }),
        ));

        Self { handlers }
    }

    /// Unsubscribes from `sensor`.
    pub fn detach(&self, sensor: &HeatSensor) {
        for (event, handler) in &self.handlers {
            sensor.events().unsubscribe(event, handler);
        }
    }
}
