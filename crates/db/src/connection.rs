//! The single persistent MongoDB connection and its observable state.

use mongodb::bson::doc;
use mongodb::event::sdam::SdamEvent;
use mongodb::event::EventHandler;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::watch;

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/jje";

/// Database name used when the connection string does not name one.
pub const DEFAULT_DB_NAME: &str = "jje";

/// Observable state of the persistent connection.
///
/// Mutated only by the driver's topology events; everything else reads it
/// through the `watch` channel returned by [`Mongo::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No round-trip has completed yet.
    Connecting,
    /// The server answered a heartbeat.
    Connected,
    /// A heartbeat failed or the server was dropped from the topology.
    Disconnected,
}

/// Handle to the single persistent MongoDB connection.
///
/// Cheaply cloneable; clones share the underlying client and observe the
/// same [`ConnectionState`].
#[derive(Clone)]
pub struct Mongo {
    client: Client,
    database: Database,
    state: watch::Receiver<ConnectionState>,
}

impl Mongo {
    /// Build a client for `uri` without performing any I/O.
    ///
    /// The driver connects lazily, so this only parses the connection
    /// string and installs the topology event handler that feeds
    /// [`ConnectionState`]. Call [`Mongo::establish`] to force the first
    /// round-trip.
    pub async fn open(uri: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(uri).await?;

        let (tx, state) = watch::channel(ConnectionState::Connecting);
        options.sdam_event_handler = Some(EventHandler::callback(move |event: SdamEvent| {
            if let Some(next) = classify(&event) {
                note(&tx, next);
            }
        }));

        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DB_NAME));

        Ok(Self {
            client,
            database,
            state,
        })
    }

    /// Perform the one startup connection attempt.
    ///
    /// Issues a `ping` command so the lazily-connecting client opens the
    /// connection now; an unreachable or misconfigured server surfaces
    /// here as an error instead of on the first real query.
    pub async fn establish(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Subscribe to connection-state transitions.
    pub fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state.clone()
    }

    /// The database named by the connection string, or [`DEFAULT_DB_NAME`].
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// The underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Map a topology event to the connection state it implies, if any.
fn classify(event: &SdamEvent) -> Option<ConnectionState> {
    match event {
        SdamEvent::ServerHeartbeatSucceeded(_) => Some(ConnectionState::Connected),
        SdamEvent::ServerHeartbeatFailed(_) | SdamEvent::ServerClosed(_) => {
            Some(ConnectionState::Disconnected)
        }
        _ => None,
    }
}

/// Publish `next` if it differs from the current state.
///
/// Heartbeats repeat every few seconds; deduplicating here means
/// subscribers only wake on genuine transitions.
fn note(tx: &watch::Sender<ConnectionState>, next: ConnectionState) {
    tx.send_if_modified(|state| {
        if *state == next {
            false
        } else {
            *state = next;
            true
        }
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
