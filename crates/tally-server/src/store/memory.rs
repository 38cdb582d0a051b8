//! Process-local counters, reset on restart.
//!
//! Backed by a keyed map of atomics so concurrent handlers on the
//! multi-threaded runtime never lose an increment. Operations cannot fail.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use tally_core::{Counter, Result};

use super::CounterStore;

#[derive(Default)]
pub struct MemStore {
    counters: DashMap<Counter, AtomicU64>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemStore {
    async fn increment(&self, counter: Counter) -> Result<()> {
        self.counters
            .entry(counter)
            .or_default()
            .fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn read(&self, counter: Counter) -> Result<u64> {
        Ok(self
            .counters
            .get(&counter)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0))
    }

    fn is_durable(&self) -> bool {
        false
    }
}
