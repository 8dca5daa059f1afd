//! The engine that owns one month's ledger state end to end.
//!
//! Wires together reconciliation from persisted rows, memoized
//! recomputation, aggregation, and deduplicated change delivery.

pub mod cache;
pub mod notify;


use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use vhts_shared::EngineConfig;

use crate::calendar::MonthRef;
use crate::ledger::state::MonthLedger;
use crate::ledger::types::{
    BalanceCategory, DailyMovement, DailyRecord, MovementField, OpeningBalances, parse_count,
};
use crate::reconcile::loader::ReconciliationLoader;
use crate::report::record::DailyReportRecord;
use crate::report::service::ReportService;
use crate::report::types::MonthlySummary;

pub use cache::ComputeCache;
pub use notify::ChangeNotifier;

/// Owns the working ledger for one month and everything derived from it.
///
/// Edits mutate the ledger; derived records are recomputed (through the
/// cache) on demand, never stored here. Reconciliation replaces the whole
/// ledger atomically when the persisted source actually changed.
#[derive(Debug)]
pub struct OccupancyEngine {
    ledger: MonthLedger,
    capacity: Option<i64>,
    cache: ComputeCache,
    notifier: ChangeNotifier,
    source_key: Option<u64>,
}

impl OccupancyEngine {
    /// Creates an engine over an empty ledger for `month`.
    #[must_use]
    pub fn new(month: MonthRef) -> Self {
        Self {
            ledger: MonthLedger::empty(month),
            capacity: None,
            cache: ComputeCache::new(),
            notifier: ChangeNotifier::new(),
            source_key: None,
        }
    }

    /// Creates an engine with the cache sized from configuration.
    #[must_use]
    pub fn from_config(month: MonthRef, config: &EngineConfig) -> Self {
        Self {
            cache: ComputeCache::from_config(config),
            ..Self::new(month)
        }
    }

    /// The month this engine covers.
    #[must_use]
    pub const fn month(&self) -> MonthRef {
        self.ledger.month()
    }

    /// The current working ledger.
    #[must_use]
    pub const fn ledger(&self) -> &MonthLedger {
        &self.ledger
    }

    /// The configured room capacity, if any.
    #[must_use]
    pub const fn capacity(&self) -> Option<i64> {
        self.capacity
    }

    /// Sets the room capacity used for the occupancy rate.
    pub const fn set_capacity(&mut self, capacity: i64) {
        self.capacity = Some(capacity);
    }

    /// Reconciles the engine against rows fetched from the backend.
    ///
    /// Skipped entirely when month and rows are value-identical to the last
    /// reconciled source, so a periodic refresh that returns the same data
    /// does not clobber in-progress edits. Returns whether the ledger was
    /// replaced.
    pub fn sync(&mut self, month: MonthRef, records: &[DailyReportRecord]) -> bool {
        let key = Self::source_fingerprint(month, records);
        if self.source_key == Some(key) {
            return false;
        }

        tracing::debug!(%month, rows = records.len(), "reconciling ledger from persisted rows");
        self.ledger = ReconciliationLoader::load(month, records);
        self.source_key = Some(key);
        true
    }

    /// Replaces the movements of a 1-based day. Days outside the month are
    /// ignored.
    pub fn set_movement(&mut self, day: u32, movement: DailyMovement) {
        self.ledger.set_movement(day, movement);
    }

    /// Applies raw operator input to one movement cell.
    ///
    /// Input is coerced the way the entry form does it: anything that is
    /// not an integer becomes 0.
    pub fn apply_movement_input(&mut self, day: u32, field: MovementField, input: &str) {
        let value = parse_count(input);
        if let Some(movement) = self.ledger.movement_mut(day) {
            movement.set(field, value);
        }
    }

    /// Replaces the opening balances.
    pub const fn set_opening(&mut self, opening: OpeningBalances) {
        self.ledger.set_opening(opening);
    }

    /// Applies raw operator input to one opening-balance cell.
    pub fn apply_opening_input(&mut self, category: BalanceCategory, input: &str) {
        let mut opening = self.ledger.opening();
        opening.set(category, parse_count(input));
        self.ledger.set_opening(opening);
    }

    /// Recomputes the balance sheet and offers it to the sink.
    ///
    /// The sink only runs when the records differ from the last delivered
    /// set. Unchanged inputs are served from the cache.
    pub fn recompute<F>(&mut self, sink: F) -> Arc<Vec<DailyRecord>>
    where
        F: FnOnce(&[DailyRecord]),
    {
        let records = self
            .cache
            .run_cached(&self.ledger.opening(), self.ledger.movements());
        self.notifier.notify(&records, sink);
        records
    }

    /// The report footer for the current state.
    ///
    /// An unconfigured capacity reports a zero occupancy rate.
    #[must_use]
    pub fn summary(&self) -> MonthlySummary {
        let records = self
            .cache
            .run_cached(&self.ledger.opening(), self.ledger.movements());
        ReportService::summarize(&records, self.capacity.unwrap_or(0))
    }

    /// Exports the current state as persistable report rows.
    #[must_use]
    pub fn report_rows(&self) -> Vec<DailyReportRecord> {
        let records = self
            .cache
            .run_cached(&self.ledger.opening(), self.ledger.movements());
        ReportService::to_report_rows(self.ledger.month(), &records)
    }

    fn source_fingerprint(month: MonthRef, records: &[DailyReportRecord]) -> u64 {
        let mut hasher = DefaultHasher::new();
        month.hash(&mut hasher);
        records.hash(&mut hasher);
        hasher.finish()
    }
}
