//! Server config loader (strict parsing).
//!
//! Configuration comes from the process environment. `from_lookup` takes an
//! arbitrary key lookup so tests never have to mutate real env vars.

pub mod schema;

use tally_core::error::{Result, TallyError};

pub use schema::ServerConfig;

/// Read configuration from the process environment.
pub fn from_env() -> Result<ServerConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from an arbitrary key lookup.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ServerConfig> {
    let port = match lookup("PORT").filter(|s| !s.is_empty()) {
        None => schema::default_port(),
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| TallyError::Config(format!("PORT must be numeric, got {raw:?}")))?,
    };

    // Absent and empty both mean in-memory mode, no connection attempt.
    let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

    let public_dir = lookup("PUBLIC_DIR")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(schema::default_public_dir);

    let tls_providers = match lookup("DATABASE_TLS_PROVIDERS") {
        None => schema::default_tls_providers(),
        Some(raw) => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    };

    let cfg = ServerConfig {
        port,
        database_url,
        public_dir,
        tls_providers,
    };
    cfg.validate()?;
    Ok(cfg)
}
