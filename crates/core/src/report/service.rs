//! Monthly totals and the occupancy rate.

use rust_decimal::Decimal;

use crate::calendar::MonthRef;
use crate::ledger::types::DailyRecord;
use crate::report::record::DailyReportRecord;
use crate::report::types::{MonthlySummary, MonthlyTotals};

/// Aggregates computed daily records into the report footer.
pub struct ReportService;

impl ReportService {
    /// Sums every column over the month's records.
    #[must_use]
    pub fn totals(records: &[DailyRecord]) -> MonthlyTotals {
        let mut totals = MonthlyTotals::default();
        for record in records {
            totals.rooms_in += record.rooms_in;
            totals.rooms_out += record.rooms_out;
            totals.rooms_today += record.today_rooms;
            totals.foreign_in += record.foreign_in;
            totals.foreign_out += record.foreign_out;
            totals.foreign_today += record.today_foreign;
            totals.local_in += record.local_in;
            totals.local_out += record.local_out;
            totals.local_today += record.today_local;
        }
        totals
    }

    /// Builds the full footer: totals plus occupancy rate.
    ///
    /// `capacity` is the hotel's room count. Non-positive capacity (not yet
    /// configured) yields a zero rate rather than an error.
    #[must_use]
    pub fn summarize(records: &[DailyRecord], capacity: i64) -> MonthlySummary {
        let totals = Self::totals(records);
        let occupancy_rate =
            Self::occupancy_rate(totals.rooms_today, capacity, records.len() as u64);
        MonthlySummary {
            totals,
            occupancy_rate,
        }
    }

    /// Exports the month's computed records as persistable report rows.
    #[must_use]
    pub fn to_report_rows(month: MonthRef, records: &[DailyRecord]) -> Vec<DailyReportRecord> {
        records
            .iter()
            .filter_map(|record| DailyReportRecord::from_computed(month, record))
            .collect()
    }

    /// Occupied room-nights as a percentage of available room-nights,
    /// rounded to two decimal places.
    ///
    /// Rates above 100 are reported as-is; overbooking and bad data are the
    /// operator's to interpret.
    fn occupancy_rate(rooms_today_total: i64, capacity: i64, day_count: u64) -> Decimal {
        if capacity <= 0 || day_count == 0 {
            return Decimal::ZERO;
        }
        let available = Decimal::from(capacity) * Decimal::from(day_count);
        (Decimal::from(rooms_today_total) / available * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
