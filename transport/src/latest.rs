//! Stale-response guard for superseded fetches.
//!
//! # Design
//! The transport makes no ordering promises across concurrent fetches and
//! does not cancel in-flight I/O. When a page re-fetches while an earlier
//! call is still pending (rapid re-filtering), both responses eventually
//! arrive, in either order. `RequestSeq` lets the caller classify them:
//! `begin()` stamps a fetch with a generation, and `is_current` reports
//! whether a newer fetch has begun since. A stale result is discarded on
//! arrival rather than rendered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide (or per-page) monotonic fetch counter.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: AtomicU64,
}

/// Token identifying one fetch. Obtained from [`RequestSeq::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new fetch, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer fetch has begun after `generation`.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }
}
