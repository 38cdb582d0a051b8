//! JSON bodies of the HTTP API.
//!
//! Field names are part of the public surface; `MetricsResponse` keeps the
//! camelCase `pageViews` key clients already depend on.

use serde::{Deserialize, Serialize};

/// `GET /api/time` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct TimeResponse {
    pub ok: bool,
    /// Current UTC wall-clock time, RFC 3339 / ISO-8601.
    pub time: String,
}

/// `POST /api/demo-write` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub ok: bool,
    /// Total writes recorded after this one.
    pub total: u64,
}

/// `GET /api/metrics` success body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub page_views: u64,
    pub writes: u64,
    /// True iff the durable store is active for this process.
    pub db: bool,
}

/// Failure body shared by all endpoints that surface store errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
