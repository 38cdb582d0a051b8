//! Route handlers.
//!
//! Handlers reach the counters only through the `CounterStore` capability;
//! which variant is active was decided once at startup. Store failures on
//! the JSON endpoints surface as 500 with the error message; the homepage
//! counter is best-effort and never costs the visitor the page.

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use chrono::{SecondsFormat, Utc};

use tally_core::api::{ErrorResponse, MetricsResponse, TimeResponse, WriteResponse};
use tally_core::{Counter, TallyError};

use crate::app_state::AppState;

/// GET /api/time
pub async fn time() -> Json<TimeResponse> {
    Json(TimeResponse {
        ok: true,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// POST /api/demo-write: increment `writes`, answer with the new total.
pub async fn demo_write(State(app): State<AppState>) -> Response {
    match write_total(&app).await {
        Ok(total) => Json(WriteResponse { ok: true, total }).into_response(),
        Err(e) => store_error(e),
    }
}

async fn write_total(app: &AppState) -> tally_core::Result<u64> {
    app.store().increment(Counter::Writes).await?;
    app.store().read(Counter::Writes).await
}

/// GET /api/metrics: both counters plus which store backs them.
pub async fn metrics(State(app): State<AppState>) -> Response {
    match read_all(&app).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => store_error(e),
    }
}

async fn read_all(app: &AppState) -> tally_core::Result<MetricsResponse> {
    Ok(MetricsResponse {
        page_views: app.store().read(Counter::PageViews).await?,
        writes: app.store().read(Counter::Writes).await?,
        db: app.store().is_durable(),
    })
}

/// Count a homepage view, then let the request fall through to static
/// serving. A failed increment is swallowed.
pub async fn track_pageview(State(app): State<AppState>, req: Request, next: Next) -> Response {
    if req.method() == Method::GET && req.uri().path() == "/" {
        let _ = app.store().increment(Counter::PageViews).await;
    }
    next.run(req).await
}

fn store_error(e: TallyError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(e.to_string())),
    )
        .into_response()
}
