//! Startup sequencing for the API server.
//!
//! [`run`] executes the strictly linear startup sequence exactly once:
//! open the database handle, spawn the lifecycle monitor, install
//! middleware and mount routes, perform the single database connection
//! attempt, and only then bind the network listener. A rejected
//! connection attempt returns [`StartupError::Database`] before any bind
//! happens — there is no retry loop and no degraded mode.

use std::net::SocketAddr;
use std::sync::Arc;

use jje_db::{ConnectionMonitor, Mongo};

use crate::config::AppConfig;
use crate::policy::OriginPolicy;
use crate::router::build_app_router;
use crate::state::AppState;

/// A failure that prevented the server from reaching a safely operable
/// state. All variants are fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The database connection attempt was rejected (bad connection
    /// string, unreachable or refusing server).
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// The network listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed after startup completed.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the server: connect, then listen until a shutdown signal.
///
/// The listener is bound if and only if the connection attempt resolved
/// successfully first; the control flow here is what enforces that
/// invariant.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    // The handle is lazy: this parses the connection string and installs
    // the state observer, without touching the network.
    let mongo = Mongo::open(&config.mongodb_uri).await?;

    // Observational only; runs until process teardown.
    tokio::spawn(ConnectionMonitor::run(mongo.state()));

    let policy = OriginPolicy::from_config(&config);
    let port = config.port;

    let state = AppState {
        db: mongo.clone(),
        config: Arc::new(config),
        policy,
    };

    // Middleware and route groups are in place before the connection
    // attempt starts; requests are not served until the bind below.
    let app = build_app_router(state);

    // The single connection attempt. Failure propagates out and the
    // listener is never bound.
    mongo.establish().await?;
    tracing::info!("MongoDB database connected successfully");

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(port, "Server is running");
    tracing::info!("Local: http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
