//! # Observer scenarios built on the dispatch core.
//!
//! Each scenario pairs one publisher with one or more subscribers:
//!
//! | Scenario     | Publisher           | Events                            | Subscribers                      |
//! |--------------|---------------------|-----------------------------------|----------------------------------|
//! | `download`   | [`DownloadManager`] | `Start`, `Progress`, `End`        | [`DownloadListener`]             |
//! | `encoder`    | [`VideoEncoder`]    | `Encoded`                         | [`MailService`], [`MessageService`] |
//! | `thermostat` | [`HeatSensor`]      | `Warning`, `Emergency`, `Normal`  | [`Thermostat`]                   |
//!
//! Simulated delays are configurable so tests can run them instantly; fixed
//! data (URLs, readings) is supplied by the caller.

mod download;
mod encoder;
mod thermostat;

pub use download::{DownloadConfig, DownloadEvent, DownloadListener, DownloadManager, UrlPayload};
pub use encoder::{
    EncoderConfig, EncoderEvent, MailService, MessageService, Video, VideoEncoded, VideoEncoder,
};
pub use thermostat::{
    HeatSensor, SensorConfig, SensorEvent, SensorRun, TemperatureReading, Thermostat,
    ThresholdTracker,
};
