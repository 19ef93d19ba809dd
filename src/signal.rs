//! # Stop long-running scenarios on OS signals.
//!
//! [`cancel_on_signal`] ties a [`CancellationToken`] to process termination
//! signals so loops such as [`HeatSensor::run`](crate::scenarios::HeatSensor::run)
//! exit cleanly on Ctrl-C.
//!
//! ## Signals
//! **Unix:** `SIGINT`, `SIGTERM`, `SIGQUIT`.
//! **Elsewhere:** Ctrl-C via [`tokio::signal::ctrl_c`].

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Spawns a task that cancels `token` when a termination signal arrives.
///
/// The task also exits, without waiting further, once `token` is cancelled by
/// someone else. Must be called inside a tokio runtime.
pub fn cancel_on_signal(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            res = wait_for_signal() => match res {
                Ok(()) => {
                    info!("termination signal received; stopping");
                    token.cancel();
                }
                Err(err) => warn!(error = %err, "cannot listen for termination signals"),
            },
            _ = token.cancelled() => {}
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
