//! # Download-progress notifier.
//!
//! [`DownloadManager`] publishes three events while "downloading" a URL:
//!
//! ```text
//! start(url)
//!   ├─► fire Start
//!   ├─► sleep(step_delay)
//!   ├─ url contains failure_marker ─► "File can't download!" ─► Err(Unavailable)
//!   └─ otherwise ─► fire Progress ─► sleep(step_delay) ─► fire End ─► Ok
//! ```
//!
//! [`DownloadListener`] is the matching subscriber: it attaches one handler per
//! event and can detach them again.

use std::time::Duration;

use tracing::debug;

use crate::dispatch::{DispatchReport, HandlerRef, Registry};
use crate::error::{DownloadError, HandlerError};
use crate::sinks::SinkRef;

/// Events published by [`DownloadManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadEvent {
    /// A download began.
    Start,
    /// Data for the URL is arriving.
    Progress,
    /// The download finished successfully.
    End,
}

/// Payload of every [`DownloadEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPayload {
    /// URL being downloaded.
    pub url: String,
}

impl UrlPayload {
    /// Creates a payload for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Last path segment of the URL (`"http://x/main.csv"` → `"main.csv"`).
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Settings for [`DownloadManager`].
#[derive(Clone, Debug)]
pub struct DownloadConfig {
    /// Simulated time spent before progress and before completion.
    pub step_delay: Duration,
    /// A URL containing this substring fails after `Start`.
    pub failure_marker: String,
}

impl Default for DownloadConfig {
    /// Default configuration:
    ///
    /// - `step_delay = 2s`
    /// - `failure_marker = "error"`
    fn default() -> Self {
        Self {
            step_delay: Duration::from_secs(2),
            failure_marker: "error".to_string(),
        }
    }
}

/// Publisher of [`DownloadEvent`]s.
pub struct DownloadManager {
    events: Registry<DownloadEvent, DownloadManager, UrlPayload>,
    config: DownloadConfig,
    sink: SinkRef,
}

impl DownloadManager {
    /// Creates a manager writing its own status lines to `sink`.
    pub fn new(config: DownloadConfig, sink: SinkRef) -> Self {
        Self {
            events: Registry::new(),
            config,
            sink,
        }
    }

    /// Subscriber registry; listeners attach here.
    pub fn events(&self) -> &Registry<DownloadEvent, DownloadManager, UrlPayload> {
        &self.events
    }

    /// Returns the manager configuration.
    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Runs one simulated download of `url`, notifying subscribers along the way.
    ///
    /// Returns the dispatch report of every event fired, in firing order.
    /// Fails with [`DownloadError::Unavailable`] when `url` contains the
    /// configured failure marker; in that case neither `Progress` nor `End` fires.
    pub async fn start(&self, url: &str) -> Result<Vec<DispatchReport<DownloadEvent>>, DownloadError> {
        let payload = UrlPayload::new(url);
        self.sink.plain("Download Manager Start..!");

        let res = self.transfer(&payload).await;

        self.sink.plain("Download Manager Stoped..!");
        res
    }

    async fn transfer(
        &self,
        payload: &UrlPayload,
    ) -> Result<Vec<DispatchReport<DownloadEvent>>, DownloadError> {
        let mut reports = Vec::with_capacity(3);
        reports.push(self.events.fire(DownloadEvent::Start, self, payload));
        tokio::time::sleep(self.config.step_delay).await;

        if payload.url.contains(self.config.failure_marker.as_str()) {
            self.sink.plain("File can't download!");
            debug!(url = %payload.url, "download rejected by failure marker");
            return Err(DownloadError::Unavailable {
                url: payload.url.clone(),
            });
        }

        reports.push(self.events.fire(DownloadEvent::Progress, self, payload));
        tokio::time::sleep(self.config.step_delay).await;
        reports.push(self.events.fire(DownloadEvent::End, self, payload));
        Ok(reports)
    }
}

/// Subscriber that reports download progress to a sink.
pub struct DownloadListener {
    start: HandlerRef<DownloadManager, UrlPayload>,
    progress: HandlerRef<DownloadManager, UrlPayload>,
    end: HandlerRef<DownloadManager, UrlPayload>,
}

impl DownloadListener {
    /// Subscribes to all three events of `manager`.
    pub fn attach(manager: &DownloadManager, sink: SinkRef) -> Self {
        let events = manager.events();

        let s = sink.clone();
        let start = events.subscribe_fn(DownloadEvent::Start, "download-start", move |_, _| {
            s.plain("File downloading....");
            Ok(())
        });

        let s = sink.clone();
        let progress = events.subscribe_fn(
            DownloadEvent::Progress,
            "download-progress",
            move |_, payload: &UrlPayload| {
                if payload.url.is_empty() {
                    return Err(HandlerError::rejected("progress without url"));
                }
                s.plain(&format!("Donwload progress, File : {}", payload.file_name()));
                Ok(())
            },
        );

        let end = events.subscribe_fn(DownloadEvent::End, "download-end", move |_, _| {
            sink.plain("File download completed.");
            Ok(())
        });

        Self {
            start,
            progress,
            end,
        }
    }

    /// Unsubscribes from `manager`. Detaching twice is harmless.
    pub fn detach(&self, manager: &DownloadManager) {
        let events = manager.events();
        events.unsubscribe(&DownloadEvent::Start, &self.start);
        events.unsubscribe(&DownloadEvent::Progress, &self.progress);
        events.unsubscribe(&DownloadEvent::End, &self.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn instant() -> DownloadConfig {
        DownloadConfig {
            step_delay: Duration::ZERO,
            ..DownloadConfig::default()
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(UrlPayload::new("http://example.com/main.csv").file_name(), "main.csv");
        assert_eq!(UrlPayload::new("main.csv").file_name(), "main.csv");
        assert_eq!(UrlPayload::new("http://example.com/").file_name(), "");
    }

    #[tokio::test]
    async fn test_successful_download() {
        let sink = Arc::new(MemorySink::new());
        let manager = DownloadManager::new(instant(), sink.clone());
        let _listener = DownloadListener::attach(&manager, sink.clone());

        let reports = manager.start("http://example.com/main.csv").await.unwrap();
        let fired: Vec<DownloadEvent> = reports.iter().map(|r| r.event).collect();
        assert_eq!(
            fired,
            vec![DownloadEvent::Start, DownloadEvent::Progress, DownloadEvent::End]
        );
        assert!(reports.iter().all(|r| r.is_clean() && r.invoked == 1));
        assert_eq!(
            sink.lines(),
            vec![
                "Download Manager Start..!",
                "File downloading....",
                "Donwload progress, File : main.csv",
                "File download completed.",
                "Download Manager Stoped..!",
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_marker_skips_progress_and_end() {
        let sink = Arc::new(MemorySink::new());
        let manager = DownloadManager::new(instant(), sink.clone());
        let _listener = DownloadListener::attach(&manager, sink.clone());

        let err = manager.start("http://example.com/error").await.unwrap_err();
        assert_eq!(
            err,
            DownloadError::Unavailable {
                url: "http://example.com/error".into()
            }
        );
        assert_eq!(
            sink.lines(),
            vec![
                "Download Manager Start..!",
                "File downloading....",
                "File can't download!",
                "Download Manager Stoped..!",
            ]
        );
    }

    #[tokio::test]
    async fn test_detach_silences_listener() {
        let sink = Arc::new(MemorySink::new());
        let manager = DownloadManager::new(instant(), sink.clone());
        let listener = DownloadListener::attach(&manager, sink.clone());
        assert_eq!(manager.events().subscriber_count(&DownloadEvent::Start), 1);

        listener.detach(&manager);
        listener.detach(&manager);
        assert!(manager.events().is_empty());

        let reports = manager.start("http://example.com/main.csv").await.unwrap();
        assert!(reports.iter().all(|r| r.is_empty()));
        assert_eq!(
            sink.lines(),
            vec!["Download Manager Start..!", "Download Manager Stoped..!"]
        );
    }

    #[tokio::test]
    async fn test_listener_failure_reaches_caller() {
        let sink = Arc::new(MemorySink::new());
        let manager = DownloadManager::new(instant(), sink.clone());
        manager
            .events()
            .subscribe_fn(DownloadEvent::Progress, "quota", |_, p: &UrlPayload| {
                Err(HandlerError::failed(format!("quota exceeded for {}", p.file_name())))
            });
        let _listener = DownloadListener::attach(&manager, sink.clone());

        let reports = manager.start("http://example.com/big.iso").await.unwrap();
        let progress = &reports[1];
        assert_eq!(progress.event, DownloadEvent::Progress);
        assert_eq!(progress.invoked, 2);
        assert_eq!(progress.failures.len(), 1);
        assert_eq!(progress.failures[0].subscriber, "quota");
        assert!(sink.lines().contains(&"Donwload progress, File : big.iso".to_string()));
    }
}
