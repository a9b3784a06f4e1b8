use anyhow::Result;
use tokio::signal;

/// Resolve once Ctrl-C or SIGTERM arrives.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_signal() -> Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Received Ctrl+C signal");
        }
        result = sigterm() => {
            result?;
            tracing::info!("Received SIGTERM signal");
        }
    }
    Ok(())
}

#[cfg(unix)]
async fn sigterm() -> Result<()> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    handler.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> Result<()> {
    std::future::pending::<Result<()>>().await
}

/// Shutdown future for `axum::serve`: waits for a signal and falls back to
/// Ctrl-C alone if the full waiter could not be installed.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_signal().await {
        fall_back_to_ctrl_c(&e).await;
    }
    tracing::info!("Shutdown signal received, initiating graceful shutdown");
}

#[allow(clippy::cognitive_complexity)]
async fn fall_back_to_ctrl_c(error: &anyhow::Error) {
    tracing::warn!(%error, "shutdown: signal waiter failed, falling back to ctrl_c()");
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "shutdown: ctrl_c() failed, stopping now");
    }
}
