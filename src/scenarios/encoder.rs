//! # Video-encoding notifier.
//!
//! [`VideoEncoder`] fires a single [`EncoderEvent::Encoded`] once a (simulated)
//! encode finishes. [`MailService`] and [`MessageService`] are independent
//! subscribers notified in the order they subscribed.

use std::sync::Arc;
use std::time::Duration;

use crate::dispatch::{DispatchReport, Handler, Registry};
use crate::error::HandlerError;
use crate::sinks::SinkRef;

/// Events published by [`VideoEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderEvent {
    /// Encoding finished.
    Encoded,
}

/// A video to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Display title, echoed in status lines and in [`VideoEncoded`].
    pub title: String,
}

impl Video {
    /// Creates a video titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Payload of [`EncoderEvent::Encoded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEncoded {
    /// Title of the encoded video.
    pub title: String,
}

/// Settings for [`VideoEncoder`].
#[derive(Clone, Debug)]
pub struct EncoderConfig {
    /// Simulated encoding time.
    pub encode_delay: Duration,
}

impl Default for EncoderConfig {
    /// Default configuration: `encode_delay = 3s`.
    fn default() -> Self {
        Self {
            encode_delay: Duration::from_secs(3),
        }
    }
}

/// Publisher of [`EncoderEvent`]s.
pub struct VideoEncoder {
    events: Registry<EncoderEvent, VideoEncoder, VideoEncoded>,
    config: EncoderConfig,
    sink: SinkRef,
}

impl VideoEncoder {
    /// Creates an encoder writing its own status lines to `sink`.
    pub fn new(config: EncoderConfig, sink: SinkRef) -> Self {
        Self {
            events: Registry::new(),
            config,
            sink,
        }
    }

    /// Subscriber registry; services attach here.
    pub fn events(&self) -> &Registry<EncoderEvent, VideoEncoder, VideoEncoded> {
        &self.events
    }

    /// Encodes `video`, then notifies every subscriber of [`EncoderEvent::Encoded`].
    ///
    /// Returns the dispatch report of the notification.
    pub async fn encode(&self, video: &Video) -> DispatchReport<EncoderEvent> {
        self.sink.plain(&format!("Video {} encoding...!", video.title));
        tokio::time::sleep(self.config.encode_delay).await;

        let payload = VideoEncoded {
            title: video.title.clone(),
        };
        self.events.fire(EncoderEvent::Encoded, self, &payload)
    }
}

/// Sends an email when a video is encoded.
pub struct MailService {
    sink: SinkRef,
}

impl MailService {
    /// Creates the service as a shared handle, ready to subscribe.
    pub fn new(sink: SinkRef) -> Arc<Self> {
        Arc::new(Self { sink })
    }
}

impl Handler<VideoEncoder, VideoEncoded> for MailService {
    fn handle(&self, _sender: &VideoEncoder, _payload: &VideoEncoded) -> Result<(), HandlerError> {
        self.sink.plain("MailService: Sending an email...");
        Ok(())
    }

    fn name(&self) -> &str {
        "mail-service"
    }
}

/// Sends a text message when a video is encoded.
pub struct MessageService {
    sink: SinkRef,
}

impl MessageService {
    /// Creates the service as a shared handle, ready to subscribe.
    pub fn new(sink: SinkRef) -> Arc<Self> {
        Arc::new(Self { sink })
    }
}

impl Handler<VideoEncoder, VideoEncoded> for MessageService {
    fn handle(&self, _sender: &VideoEncoder, _payload: &VideoEncoded) -> Result<(), HandlerError> {
        self.sink.plain("MessageService: Sending a message...");
        Ok(())
    }

    fn name(&self) -> &str {
        "message-service"
    }
}
