//! Counter storage capability and startup-time store selection.
//!
//! Handlers depend on the `CounterStore` trait only; whether counters live
//! in process memory or in Postgres is decided exactly once, in `select`.

pub mod memory;
pub mod postgres;
pub mod tls;

use std::sync::Arc;

use async_trait::async_trait;

use tally_core::{Counter, Result};

use crate::config::ServerConfig;

pub use memory::MemStore;
pub use postgres::PgStore;

/// Increment/read access to the named counters.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Record one occurrence of `counter`.
    async fn increment(&self, counter: Counter) -> Result<()>;

    /// Current value of `counter`.
    async fn read(&self, counter: Counter) -> Result<u64>;

    /// True iff counters are backed by the durable store.
    fn is_durable(&self) -> bool;
}

/// Choose the store for the lifetime of this process.
///
/// No configured database means in-memory counters with no connection
/// attempt. A configured database that fails schema setup is discarded for
/// good: the process keeps in-memory counters even if connectivity later
/// recovers. There is no health-check loop and no second attempt.
pub async fn select(cfg: &ServerConfig) -> Arc<dyn CounterStore> {
    let Some(url) = cfg.database_url.as_deref() else {
        tracing::info!("no DATABASE_URL, counters are in-memory");
        return Arc::new(MemStore::new());
    };

    match PgStore::connect(url, &cfg.tls_providers).await {
        Ok(store) => {
            tracing::info!("database ready");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "database init failed, falling back to in-memory counters");
            Arc::new(MemStore::new())
        }
    }
}
