use tally_core::error::{Result, TallyError};

use crate::store::tls;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP server listens on (`PORT`, default 3000).
    pub port: u16,
    /// Postgres connection string (`DATABASE_URL`). `None` selects
    /// in-memory counters for the whole process lifetime.
    pub database_url: Option<String>,
    /// Directory served for unmatched GET paths (`PUBLIC_DIR`).
    pub public_dir: String,
    /// Provider substrings that force TLS on the database connection
    /// (`DATABASE_TLS_PROVIDERS`, comma-separated override).
    pub tls_providers: Vec<String>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(TallyError::Config("PORT must not be 0".into()));
        }
        if self.public_dir.is_empty() {
            return Err(TallyError::Config("PUBLIC_DIR must not be empty".into()));
        }
        Ok(())
    }

    /// True iff the durable store should be attempted at startup.
    pub fn wants_database(&self) -> bool {
        self.database_url.is_some()
    }
}

pub fn default_port() -> u16 {
    3000
}

pub fn default_public_dir() -> String {
    "public".into()
}

pub fn default_tls_providers() -> Vec<String> {
    tls::default_providers()
}
