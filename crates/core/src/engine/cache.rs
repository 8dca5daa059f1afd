//! Memoized recomputation of the monthly balance sheet.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use vhts_shared::EngineConfig;

use crate::ledger::recurrence::RecurrenceEngine;
use crate::ledger::types::{DailyMovement, DailyRecord, OpeningBalances};

/// Default number of cached months.
pub const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Default time-to-live for cached results, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cache over [`RecurrenceEngine::compute`] keyed by input fingerprint.
///
/// Identical inputs (opening balances plus the full movement vector) hash to
/// the same key and return the same shared result without recomputing.
/// Results are `Arc`-shared so a hit is a pointer clone.
#[derive(Debug, Clone)]
pub struct ComputeCache {
    cache: Cache<u64, Arc<Vec<DailyRecord>>>,
}

impl ComputeCache {
    /// Creates a cache with default capacity and time-to-live.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with explicit capacity and time-to-live.
    #[must_use]
    pub fn with_config(capacity: u64, ttl_secs: u64) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build(),
        }
    }

    /// Creates a cache sized from application configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(config.cache_capacity, config.cache_ttl_secs)
    }

    /// Runs the recurrence, reusing a cached result on identical inputs.
    #[must_use]
    pub fn run_cached(
        &self,
        opening: &OpeningBalances,
        movements: &[DailyMovement],
    ) -> Arc<Vec<DailyRecord>> {
        let key = Self::input_key(opening, movements);
        self.cache
            .get_with(key, || Arc::new(RecurrenceEngine::compute(opening, movements)))
    }

    /// Drops every cached result.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Number of cached results, for diagnostics. Approximate until pending
    /// maintenance runs.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Flushes pending cache maintenance so counts are exact.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    fn input_key(opening: &OpeningBalances, movements: &[DailyMovement]) -> u64 {
        let mut hasher = DefaultHasher::new();
        opening.hash(&mut hasher);
        movements.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for ComputeCache {
    fn default() -> Self {
        Self::new()
    }
}
