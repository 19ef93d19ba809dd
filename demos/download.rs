//! # Download Demo
//!
//! A download manager publishes start/progress/end events; a listener prints them.
//! The first URL contains the failure marker and stops after `Start`.
//!
//! ## Run
//! ```bash
//! cargo run --example download
//! ```

use std::sync::Arc;

use eventline::scenarios::{DownloadConfig, DownloadListener, DownloadManager};
use eventline::{ConsoleSink, SinkRef};
use tracing_subscriber::EnvFilter;

const URLS: &[&str] = &["http://example.com/error", "http://example.com/main.csv"];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("eventline=warn".parse()?))
        .init();

    let sink: SinkRef = Arc::new(ConsoleSink::new());
    let manager = DownloadManager::new(DownloadConfig::default(), sink.clone());
    let _listener = DownloadListener::attach(&manager, sink);

    for (i, url) in URLS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match manager.start(url).await {
            Ok(reports) => {
                for failure in reports.iter().flat_map(|r| &r.failures) {
                    tracing::warn!(subscriber = %failure.subscriber, "{}", failure.cause);
                }
            }
            Err(err) => tracing::info!(label = err.as_label(), "{err}"),
        }
    }
    Ok(())
}
