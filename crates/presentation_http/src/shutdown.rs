//! Graceful shutdown trigger for the server

use std::{future::Future, io};

use tokio::signal;
use tracing::info;

/// Wait for SIGINT or SIGTERM
///
/// A handler that cannot be installed never fires, so the server keeps
/// running until the other signal arrives.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for("Ctrl+C", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Resolve when `signal` fires; park forever if its handler failed
async fn wait_for(name: &str, signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}
