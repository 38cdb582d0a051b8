//! Shared application state for the tally server.
//!
//! Holds the resolved config and the store chosen at startup. Cloning is
//! cheap; every handler sees the same store instance for the whole process.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<dyn CounterStore>,
}

impl AppState {
    pub fn new(cfg: ServerConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.inner.store.as_ref()
    }
}
