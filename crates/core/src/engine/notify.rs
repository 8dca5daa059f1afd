//! Deduplicated delivery of recomputed records to a downstream sink.

use std::sync::Arc;

use crate::ledger::types::DailyRecord;

/// Pushes recomputed records downstream, once per distinct result.
///
/// After every recompute the engine offers the result here; the sink only
/// runs when the records differ from the last delivered set, so a
/// no-op edit does not ripple downstream.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    last_sent: Option<Arc<Vec<DailyRecord>>>,
}

impl ChangeNotifier {
    /// Creates a notifier that has delivered nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_sent: None }
    }

    /// Offers a result to the sink. Returns whether the sink ran.
    ///
    /// The result is marked delivered before the sink runs, so a sink that
    /// feeds back into the engine cannot re-trigger itself with the same
    /// records.
    pub fn notify<F>(&mut self, records: &Arc<Vec<DailyRecord>>, sink: F) -> bool
    where
        F: FnOnce(&[DailyRecord]),
    {
        if let Some(prev) = &self.last_sent {
            if **prev == **records {
                tracing::trace!(days = records.len(), "suppressing unchanged dataset");
                return false;
            }
        }
        self.last_sent = Some(Arc::clone(records));
        sink(records);
        true
    }

    /// Forgets the last delivered result; the next offer always delivers.
    pub fn reset(&mut self) {
        self.last_sent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::recurrence::RecurrenceEngine;
    use crate::ledger::types::{DailyMovement, OpeningBalances};

    fn some_records(rooms: i64) -> Arc<Vec<DailyRecord>> {
        let opening = OpeningBalances {
            rooms,
            foreign: 0,
            local: 0,
        };
        Arc::new(RecurrenceEngine::compute(
            &opening,
            &[DailyMovement::default(); 3],
        ))
    }

    #[test]
    fn test_first_offer_always_delivers() {
        let mut notifier = ChangeNotifier::new();
        let mut delivered = 0;
        assert!(notifier.notify(&some_records(5), |_| delivered += 1));
        assert_eq!(delivered, 1);
    }

    #[test]
    fn test_equal_records_delivered_once() {
        let mut notifier = ChangeNotifier::new();
        let mut delivered = 0;

        // Distinct allocations with equal contents count as the same result.
        assert!(notifier.notify(&some_records(5), |_| delivered += 1));
        assert!(!notifier.notify(&some_records(5), |_| delivered += 1));
        assert_eq!(delivered, 1);

        assert!(notifier.notify(&some_records(6), |_| delivered += 1));
        assert_eq!(delivered, 2);
    }

    #[test]
    fn test_reset_forces_redelivery() {
        let mut notifier = ChangeNotifier::new();
        let records = some_records(5);
        let mut delivered = 0;

        assert!(notifier.notify(&records, |_| delivered += 1));
        notifier.reset();
        assert!(notifier.notify(&records, |_| delivered += 1));
        assert_eq!(delivered, 2);
    }
}
