//! Aggregate types for the monthly report footer.

use rust_decimal::Decimal;
use serde::Serialize;

/// Column sums over every day of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    /// Total rooms checked in.
    pub rooms_in: i64,
    /// Total rooms checked out.
    pub rooms_out: i64,
    /// Sum of end-of-day occupied-room counts (room-nights).
    pub rooms_today: i64,
    /// Total foreign guests checked in.
    pub foreign_in: i64,
    /// Total foreign guests checked out.
    pub foreign_out: i64,
    /// Sum of end-of-day resident foreign-guest counts.
    pub foreign_today: i64,
    /// Total domestic guests checked in.
    pub local_in: i64,
    /// Total domestic guests checked out.
    pub local_out: i64,
    /// Sum of end-of-day resident domestic-guest counts.
    pub local_today: i64,
}

/// The report footer: column totals plus the month's occupancy rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Column sums over the month.
    pub totals: MonthlyTotals,
    /// Occupancy rate in percent, rounded to two decimal places.
    pub occupancy_rate: Decimal,
}
