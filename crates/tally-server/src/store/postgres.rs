//! Durable counters on Postgres.
//!
//! Counters are append-only tables; the value is the row count. Each
//! increment inserts one row with an auto-assigned id and timestamp, so
//! concurrent requests never contend on a mutable cell and counts are
//! consistent with completed inserts at read time.

use std::str::FromStr;

use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::config::SslMode;
use tokio_postgres::NoTls;

use tally_core::error::{Result, TallyError};
use tally_core::Counter;

use super::{tls, CounterStore};

const POOL_MAX_SIZE: usize = 16;

/// Idempotent table creation, safe to re-run against an initialized store.
pub fn create_table_sql(counter: Counter) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (id SERIAL PRIMARY KEY, at TIMESTAMP DEFAULT NOW())",
        counter.table()
    )
}

fn insert_sql(counter: Counter) -> String {
    format!("INSERT INTO {} DEFAULT VALUES", counter.table())
}

fn count_sql(counter: Counter) -> String {
    format!("SELECT COUNT(*) FROM {}", counter.table())
}

pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    /// Build the pool and create the backing tables. Any failure here means
    /// the store is unusable and the caller falls back to in-memory.
    pub async fn connect(url: &str, tls_providers: &[String]) -> Result<Self> {
        let mut pg_cfg = tokio_postgres::Config::from_str(url)
            .map_err(|e| TallyError::StoreInit(format!("invalid DATABASE_URL: {e}")))?;

        let mgr_cfg = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let manager = if tls::requires_tls(url, tls_providers) {
            // Managed providers present certs we cannot verify locally.
            pg_cfg.ssl_mode(SslMode::Require);
            let connector = TlsConnector::builder()
                .danger_accept_invalid_certs(true)
                .build()
                .map_err(|e| TallyError::StoreInit(format!("tls setup: {e}")))?;
            Manager::from_config(pg_cfg, MakeTlsConnector::new(connector), mgr_cfg)
        } else {
            Manager::from_config(pg_cfg, NoTls, mgr_cfg)
        };

        let pool = Pool::builder(manager)
            .max_size(POOL_MAX_SIZE)
            .build()
            .map_err(|e| TallyError::StoreInit(format!("pool setup: {e}")))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| TallyError::StoreInit(e.to_string()))?;
        for counter in Counter::ALL {
            client
                .batch_execute(&create_table_sql(counter))
                .await
                .map_err(|e| TallyError::StoreInit(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CounterStore for PgStore {
    async fn increment(&self, counter: Counter) -> Result<()> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| TallyError::StoreUnavailable(e.to_string()))?;
        client
            .execute(insert_sql(counter).as_str(), &[])
            .await
            .map_err(|e| TallyError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn read(&self, counter: Counter) -> Result<u64> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| TallyError::StoreUnavailable(e.to_string()))?;
        let row = client
            .query_one(count_sql(counter).as_str(), &[])
            .await
            .map_err(|e| TallyError::StoreUnavailable(e.to_string()))?;
        let count: i64 = row
            .try_get(0)
            .map_err(|e| TallyError::StoreUnavailable(e.to_string()))?;
        Ok(count as u64)
    }

    fn is_durable(&self) -> bool {
        true
    }
}
