//! Occupancy ledger state and the carry-forward recurrence.
//!
//! This module implements the heart of the monthly report:
//! - Daily movement records (check-ins and check-outs per category)
//! - Opening balances carried over from the previous month
//! - The mutable working set for one month
//! - The recurrence that chains each day's closing balance into the next
//!   day's opening balance

pub mod recurrence;
pub mod state;
pub mod types;

#[cfg(test)]
mod recurrence_props;

pub use recurrence::RecurrenceEngine;
pub use state::MonthLedger;
pub use types::{
    BalanceCategory, DailyMovement, DailyRecord, MovementField, OpeningBalances, parse_count,
};
