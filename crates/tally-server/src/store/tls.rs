//! TLS policy for managed Postgres hosting.
//!
//! Several hosted providers require TLS but present certificates that do
//! not verify against the local trust store. The connection string is
//! matched against a configurable provider allowlist; a hit forces TLS with
//! peer verification disabled. This is a heuristic, not a protocol
//! requirement, which is why the list is configuration and not code.

/// Default provider substrings, matched case-insensitively.
pub const DEFAULT_TLS_PROVIDERS: &[&str] = &[
    "amazonaws",
    "render",
    "railway",
    "supabase",
    "azure",
    "gcp",
    "neon",
    "timescale",
    "heroku",
];

pub fn default_providers() -> Vec<String> {
    DEFAULT_TLS_PROVIDERS.iter().map(|s| s.to_string()).collect()
}

/// True iff `conn_str` names any provider from the allowlist.
pub fn requires_tls(conn_str: &str, providers: &[String]) -> bool {
    let haystack = conn_str.to_ascii_lowercase();
    providers
        .iter()
        .any(|p| !p.is_empty() && haystack.contains(&p.to_ascii_lowercase()))
}
