//! The carry-forward recurrence that turns movements into a balance sheet.

use crate::ledger::state::MonthLedger;
use crate::ledger::types::{DailyMovement, DailyRecord, OpeningBalances};

/// Computes the daily running balances for a month.
///
/// Stateless. The recurrence is a single forward pass: each day's closing
/// balance (`today`) becomes the next day's opening balance (`yesterday`),
/// with day 1 opening from the previous month's closing balances.
pub struct RecurrenceEngine;

impl RecurrenceEngine {
    /// Runs the recurrence over one month of movements.
    ///
    /// Returns one record per input slot, in day order. Balances are plain
    /// integer arithmetic and may go negative; nothing is clamped.
    #[must_use]
    pub fn compute(opening: &OpeningBalances, movements: &[DailyMovement]) -> Vec<DailyRecord> {
        let mut records = Vec::with_capacity(movements.len());

        let mut prev_rooms = opening.rooms;
        let mut prev_foreign = opening.foreign;
        let mut prev_local = opening.local;
        let mut day: u32 = 0;

        for movement in movements {
            day += 1;

            let today_rooms = prev_rooms + movement.rooms_in - movement.rooms_out;
            let today_foreign = prev_foreign + movement.foreign_in - movement.foreign_out;
            let today_local = prev_local + movement.local_in - movement.local_out;

            records.push(DailyRecord {
                day,
                rooms_in: movement.rooms_in,
                rooms_out: movement.rooms_out,
                foreign_in: movement.foreign_in,
                foreign_out: movement.foreign_out,
                local_in: movement.local_in,
                local_out: movement.local_out,
                yesterday_rooms: prev_rooms,
                yesterday_foreign: prev_foreign,
                yesterday_local: prev_local,
                today_rooms,
                today_foreign,
                today_local,
            });

            prev_rooms = today_rooms;
            prev_foreign = today_foreign;
            prev_local = today_local;
        }

        records
    }

    /// Convenience wrapper over [`RecurrenceEngine::compute`] for a ledger.
    #[must_use]
    pub fn compute_ledger(ledger: &MonthLedger) -> Vec<DailyRecord> {
        Self::compute(&ledger.opening(), ledger.movements())
    }
}
