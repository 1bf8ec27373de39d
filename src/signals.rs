//! Interrupt and termination signals.
//!
//! The listener races the command being run; whichever finishes first
//! decides how the process ends. A signal ends it immediately without
//! waiting for a running task's subprocess.

/// Resolve on the first Ctrl-C, or SIGTERM on unix.
///
/// If a handler cannot be installed the corresponding branch never
/// resolves, so a broken signal setup never ends a run on its own.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::debug!("shutdown signal received");
}
