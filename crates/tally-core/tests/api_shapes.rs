//! API body shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use tally_core::api::{ErrorResponse, MetricsResponse, TimeResponse, WriteResponse};
use tally_core::Counter;

#[test]
fn metrics_uses_camel_case_keys() {
    let body = MetricsResponse {
        page_views: 7,
        writes: 2,
        db: false,
    };
    let v: Value = serde_json::to_value(&body).unwrap();
    assert_eq!(v, json!({ "pageViews": 7, "writes": 2, "db": false }));
}

#[test]
fn write_response_shape() {
    let body = WriteResponse { ok: true, total: 3 };
    let v: Value = serde_json::to_value(&body).unwrap();
    assert_eq!(v, json!({ "ok": true, "total": 3 }));
}

#[test]
fn time_response_shape() {
    let body = TimeResponse {
        ok: true,
        time: "2026-08-07T12:00:00.000Z".into(),
    };
    let v: Value = serde_json::to_value(&body).unwrap();
    assert_eq!(v["ok"], json!(true));
    assert_eq!(v["time"], json!("2026-08-07T12:00:00.000Z"));
}

#[test]
fn error_response_is_never_ok() {
    let body = ErrorResponse::new("store unavailable: connection refused");
    assert!(!body.ok);
    let v: Value = serde_json::to_value(&body).unwrap();
    assert_eq!(v["ok"], json!(false));
    assert_eq!(v["error"], json!("store unavailable: connection refused"));
}

#[test]
fn counter_names_and_tables() {
    assert_eq!(Counter::PageViews.name(), "pageViews");
    assert_eq!(Counter::PageViews.table(), "pageviews");
    assert_eq!(Counter::Writes.name(), "writes");
    assert_eq!(Counter::Writes.table(), "writes");
    assert_eq!(Counter::ALL.len(), 2);
    assert_eq!(Counter::PageViews.to_string(), "pageViews");
}
