//! Store-level tests: in-memory atomicity, TLS policy, schema statements.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use tally_core::Counter;
use tally_server::store::postgres::create_table_sql;
use tally_server::store::{tls, CounterStore, MemStore};

#[tokio::test]
async fn counters_start_at_zero() {
    let store = MemStore::new();
    for counter in Counter::ALL {
        assert_eq!(store.read(counter).await.unwrap(), 0);
    }
    assert!(!store.is_durable());
}

#[tokio::test]
async fn increments_are_per_counter() {
    let store = MemStore::new();
    store.increment(Counter::PageViews).await.unwrap();
    store.increment(Counter::Writes).await.unwrap();
    store.increment(Counter::Writes).await.unwrap();
    assert_eq!(store.read(Counter::PageViews).await.unwrap(), 1);
    assert_eq!(store.read(Counter::Writes).await.unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_increments_lose_nothing() {
    let store = Arc::new(MemStore::new());
    let mut tasks = Vec::new();
    for _ in 0..64 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            store.increment(Counter::Writes).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    assert_eq!(store.read(Counter::Writes).await.unwrap(), 64);
    assert_eq!(store.read(Counter::PageViews).await.unwrap(), 0);
}

#[test]
fn tls_forced_for_known_providers_case_insensitive() {
    let providers = tls::default_providers();
    assert!(tls::requires_tls(
        "postgres://u:p@db.SUPABASE.co:5432/app",
        &providers
    ));
    assert!(tls::requires_tls(
        "postgres://u:p@mydb.abc123.eu-west-1.rds.amazonaws.com/app",
        &providers
    ));
}

#[test]
fn tls_not_forced_for_plain_hosts() {
    let providers = tls::default_providers();
    assert!(!tls::requires_tls("postgres://tally@localhost/tally", &providers));
    assert!(!tls::requires_tls("postgres://tally@10.0.0.5:5432/tally", &providers));
}

#[test]
fn tls_respects_custom_provider_list() {
    let providers = vec!["corp-pg".to_string()];
    assert!(tls::requires_tls("postgres://u@pg.corp-pg.internal/app", &providers));
    assert!(!tls::requires_tls(
        "postgres://u@db.supabase.co/app",
        &providers
    ));
    assert!(!tls::requires_tls("postgres://u@db.supabase.co/app", &[]));
}

#[test]
fn schema_statements_are_idempotent() {
    for counter in Counter::ALL {
        let sql = create_table_sql(counter);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS"));
        assert!(sql.contains(counter.table()));
        assert!(sql.contains("SERIAL PRIMARY KEY"));
        assert!(sql.contains("DEFAULT NOW()"));
    }
}
