//! Shared error type across tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Invalid environment configuration; rejected at startup.
    #[error("bad config: {0}")]
    Config(String),
    /// Durable store schema setup failed at startup. Recovered by the
    /// selector's permanent fallback to in-memory counters, never surfaced
    /// to clients.
    #[error("store init failed: {0}")]
    StoreInit(String),
    /// A durable store operation failed mid-request (e.g. connectivity
    /// drop). Handled per call; the store selection never changes after
    /// startup.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}
