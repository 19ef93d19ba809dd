//! # Video Encoder Demo
//!
//! Encodes one video and notifies a mail and a message service.
//!
//! ## Run
//! ```bash
//! cargo run --example encoder
//! ```

use eventline::ConsoleSink;
use eventline::scenarios::{
    EncoderConfig, EncoderEvent, MailService, MessageService, Video, VideoEncoder,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("eventline=warn".parse()?))
        .init();

    let sink = Arc::new(ConsoleSink::new());
    let encoder = VideoEncoder::new(EncoderConfig::default(), sink.clone());

    encoder
        .events()
        .subscribe(EncoderEvent::Encoded, MailService::new(sink.clone()));
    encoder
        .events()
        .subscribe(EncoderEvent::Encoded, MessageService::new(sink));

    let report = encoder.encode(&Video::new("Vlog-1")).await;
    for failure in &report.failures {
        tracing::warn!(subscriber = %failure.subscriber, "{}", failure.cause);
    }
    Ok(())
}
