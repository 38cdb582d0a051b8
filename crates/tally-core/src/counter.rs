//! Counter identifiers.
//!
//! Exactly two counters exist. Each maps to a stable JSON field name and,
//! in durable mode, to an append-only table whose row count is the value.

use std::fmt;

/// A named, monotonically non-decreasing counter. There is no decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    PageViews,
    Writes,
}

impl Counter {
    /// Every counter the service exposes.
    pub const ALL: [Counter; 2] = [Counter::PageViews, Counter::Writes];

    /// Field name used in JSON responses.
    pub fn name(self) -> &'static str {
        match self {
            Counter::PageViews => "pageViews",
            Counter::Writes => "writes",
        }
    }

    /// Backing table name in durable mode.
    pub fn table(self) -> &'static str {
        match self {
            Counter::PageViews => "pageviews",
            Counter::Writes => "writes",
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
