//! Mapping persisted report rows back onto a month's movement slots.

use chrono::Datelike;

use crate::calendar::MonthRef;
use crate::ledger::state::MonthLedger;
use crate::ledger::types::{DailyMovement, OpeningBalances};
use crate::report::record::DailyReportRecord;

/// Rebuilds a [`MonthLedger`] from rows previously saved to the backend.
///
/// Stateless. The resulting ledger replaces whatever the operator had in
/// progress; reconciliation is wholesale, never a merge.
pub struct ReconciliationLoader;

impl ReconciliationLoader {
    /// Maps persisted rows onto a zero-filled ledger for `month`.
    ///
    /// Each row lands in the slot for its UTC day of month. Rows whose day
    /// falls outside the month are skipped; the backend is queried by month
    /// so such rows indicate clock or query drift, logged but not fatal.
    /// A day-1 row also recovers the opening balances by inverting the
    /// daily balance law.
    #[must_use]
    pub fn load(month: MonthRef, records: &[DailyReportRecord]) -> MonthLedger {
        let day_count = month.day_count();
        let mut movements = vec![DailyMovement::default(); day_count as usize];
        let mut opening = OpeningBalances::default();
        let mut skipped = 0_usize;

        for record in records {
            let day = record.report_date.day();
            if day == 0 || day > day_count {
                skipped += 1;
                continue;
            }
            movements[day as usize - 1] = record.movement();
            if day == 1 {
                opening = record.derive_opening();
            }
        }

        if skipped > 0 {
            tracing::debug!(%month, skipped, "skipped report rows outside month");
        }

        MonthLedger::from_parts(month, opening, movements)
    }
}
