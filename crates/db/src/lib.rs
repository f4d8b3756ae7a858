//! MongoDB connection handle and lifecycle observation for the jje backend.
//!
//! This crate owns the single persistent database connection:
//!
//! - [`Mongo`] — lazily-connecting client wrapper. [`Mongo::open`] parses
//!   the connection string without touching the network; the initial
//!   round-trip happens in [`Mongo::establish`].
//! - [`ConnectionState`] — observable state of the connection, fed from
//!   the driver's topology events and distributed through a
//!   `tokio::sync::watch` channel.
//! - [`ConnectionMonitor`] — background task that logs state transitions
//!   for the lifetime of the process.

pub mod connection;
pub mod monitor;

pub use connection::{ConnectionState, Mongo, DEFAULT_DB_NAME, DEFAULT_URI};
pub use monitor::ConnectionMonitor;
