//! Server lifecycle: serving, signal handling, bounded graceful shutdown.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Serves `app` until `shutdown` resolves, then drains in-flight requests.
///
/// Fails if draining takes longer than `grace`.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let token = CancellationToken::new();
    let server_token = token.clone();

    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_token.cancelled().await })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            // The server stopped without being asked to.
            result??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    info!("Shutting down server...");
    token.cancel();

    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            result??;
            info!("Server exited");
            Ok(())
        }
        Err(_) => anyhow::bail!(
            "server forced to shut down: requests still running after {}s",
            grace.as_secs()
        ),
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
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
}
