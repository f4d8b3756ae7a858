//! Connection lifecycle monitor.
//!
//! [`ConnectionMonitor`] subscribes to the [`ConnectionState`] watch
//! channel of a [`Mongo`](crate::Mongo) handle and logs every transition.
//! It runs as a long-lived background task and shuts down when the state
//! sender is dropped (process teardown). It has no decision authority:
//! it observes and logs, nothing else.

use tokio::sync::watch;

use crate::connection::ConnectionState;

/// Background task that logs connection-state transitions.
pub struct ConnectionMonitor;

impl ConnectionMonitor {
    /// Run the monitoring loop.
    ///
    /// Logs the current state, then waits for the next transition. The
    /// loop exits when the channel is closed, i.e. when the owning
    /// [`Mongo`](crate::Mongo) handle (and every clone) is gone.
    pub async fn run(mut state: watch::Receiver<ConnectionState>) {
        loop {
            match *state.borrow_and_update() {
                ConnectionState::Connecting => {}
                ConnectionState::Connected => tracing::info!("MongoDB connected"),
                ConnectionState::Disconnected => tracing::warn!("MongoDB disconnected"),
            }

            if state.changed().await.is_err() {
                tracing::info!("Connection state channel closed, monitor shutting down");
                break;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
