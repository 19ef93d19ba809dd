//! Error types used by the dispatch core and the bundled scenarios.
//!
//! This module defines:
//!
//! - [`HandlerError`] — failure returned by a subscriber from [`Handler::handle`](crate::Handler::handle).
//! - [`FailureCause`] — why a single subscriber invocation failed during a fire.
//! - [`DownloadError`] — outcome of a download that never reached the progress stage.
//!
//! All types provide `as_label` for logs/metrics.

use thiserror::Error;

/// # Errors returned by subscribers.
///
/// A subscriber reports a fault by returning one of these. The registry never
/// propagates it to the publisher as an `Err`; it is recorded in the
/// [`DispatchReport`](crate::DispatchReport) of the fire that triggered it.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The subscriber could not process the payload (bad data, missing resource, ...).
    #[error("handler failed: {reason}")]
    Failed {
        /// Human-readable failure message.
        reason: String,
    },

    /// The subscriber deliberately ignored an event it cannot handle.
    #[error("handler rejected event: {reason}")]
    Rejected {
        /// Why the event was rejected.
        reason: String,
    },
}

impl HandlerError {
    /// Shorthand for [`HandlerError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        HandlerError::Failed {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`HandlerError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        HandlerError::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventline::HandlerError;
    ///
    /// assert_eq!(HandlerError::failed("boom").as_label(), "handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Failed { .. } => "handler_failed",
            HandlerError::Rejected { .. } => "handler_rejected",
        }
    }
}

/// # Why one subscriber invocation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// The handler returned an error.
    #[error(transparent)]
    Returned(#[from] HandlerError),

    /// The handler panicked; the panic was caught by the registry.
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl FailureCause {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            FailureCause::Returned(err) => err.as_label(),
            FailureCause::Panicked(_) => "handler_panicked",
        }
    }

    /// True if the failure was a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, FailureCause::Panicked(_))
    }
}

/// # Errors produced by the download scenario.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// The URL matched the configured failure marker; nothing was downloaded.
    #[error("file can't download: {url}")]
    Unavailable {
        /// URL that failed.
        url: String,
    },
}

impl DownloadError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventline::DownloadError;
    ///
    /// let err = DownloadError::Unavailable { url: "http://example.com/error".into() };
    /// assert_eq!(err.as_label(), "download_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DownloadError::Unavailable { .. } => "download_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returned_cause_keeps_handler_label() {
        let cause = FailureCause::from(HandlerError::rejected("not mine"));
        assert_eq!(cause.as_label(), "handler_rejected");
        assert!(!cause.is_panic());
        assert_eq!(cause.to_string(), "handler rejected event: not mine");
    }

    #[test]
    fn test_panicked_cause() {
        let cause = FailureCause::Panicked("index out of bounds".into());
        assert_eq!(cause.as_label(), "handler_panicked");
        assert!(cause.is_panic());
        assert_eq!(cause.to_string(), "handler panicked: index out of bounds");
    }
}
