//! Daily movement and balance types for the occupancy ledger.

use serde::{Deserialize, Serialize};

/// Check-in/check-out counts entered for a single calendar day.
///
/// One instance exists per day of the active month. Defaults to all-zero;
/// counts are intended non-negative but are not enforced here - inconsistent
/// data surfaces downstream as negative balances rather than as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyMovement {
    /// Rooms checked in.
    pub rooms_in: i64,
    /// Rooms checked out.
    pub rooms_out: i64,
    /// Foreign guests checked in.
    pub foreign_in: i64,
    /// Foreign guests checked out.
    pub foreign_out: i64,
    /// Domestic guests checked in.
    pub local_in: i64,
    /// Domestic guests checked out.
    pub local_out: i64,
}

/// Identifies one editable movement column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementField {
    /// Rooms checked in.
    RoomsIn,
    /// Rooms checked out.
    RoomsOut,
    /// Foreign guests checked in.
    ForeignIn,
    /// Foreign guests checked out.
    ForeignOut,
    /// Domestic guests checked in.
    LocalIn,
    /// Domestic guests checked out.
    LocalOut,
}

impl DailyMovement {
    /// Returns one movement column.
    #[must_use]
    pub const fn get(self, field: MovementField) -> i64 {
        match field {
            MovementField::RoomsIn => self.rooms_in,
            MovementField::RoomsOut => self.rooms_out,
            MovementField::ForeignIn => self.foreign_in,
            MovementField::ForeignOut => self.foreign_out,
            MovementField::LocalIn => self.local_in,
            MovementField::LocalOut => self.local_out,
        }
    }

    /// Sets one movement column.
    pub const fn set(&mut self, field: MovementField, value: i64) {
        match field {
            MovementField::RoomsIn => self.rooms_in = value,
            MovementField::RoomsOut => self.rooms_out = value,
            MovementField::ForeignIn => self.foreign_in = value,
            MovementField::ForeignOut => self.foreign_out = value,
            MovementField::LocalIn => self.local_in = value,
            MovementField::LocalOut => self.local_out = value,
        }
    }
}

/// Closing balances of the previous month - the "yesterday" of day 1.
///
/// Either entered by the operator or reverse-derived from the persisted
/// day-1 row during reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpeningBalances {
    /// Occupied rooms.
    pub rooms: i64,
    /// Resident foreign guests.
    pub foreign: i64,
    /// Resident domestic guests.
    pub local: i64,
}

/// Identifies one balance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceCategory {
    /// Occupied rooms.
    Rooms,
    /// Resident foreign guests.
    Foreign,
    /// Resident domestic guests.
    Local,
}

impl OpeningBalances {
    /// Returns one balance category.
    #[must_use]
    pub const fn get(self, category: BalanceCategory) -> i64 {
        match category {
            BalanceCategory::Rooms => self.rooms,
            BalanceCategory::Foreign => self.foreign,
            BalanceCategory::Local => self.local,
        }
    }

    /// Sets one balance category.
    pub const fn set(&mut self, category: BalanceCategory, value: i64) {
        match category {
            BalanceCategory::Rooms => self.rooms = value,
            BalanceCategory::Foreign => self.foreign = value,
            BalanceCategory::Local => self.local = value,
        }
    }
}

/// A fully computed row of the monthly balance sheet.
///
/// Derived and immutable. Records form a strict chain: row `i`'s
/// `yesterday_*` balances equal row `i - 1`'s `today_*` balances, and row 1
/// opens from [`OpeningBalances`]. Balances may be negative when the entered
/// movements are inconsistent with reality; that is a data-quality signal
/// for the operator, not an engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyRecord {
    /// 1-based day of the month.
    pub day: u32,

    /// Rooms checked in.
    pub rooms_in: i64,
    /// Rooms checked out.
    pub rooms_out: i64,
    /// Foreign guests checked in.
    pub foreign_in: i64,
    /// Foreign guests checked out.
    pub foreign_out: i64,
    /// Domestic guests checked in.
    pub local_in: i64,
    /// Domestic guests checked out.
    pub local_out: i64,

    /// Rooms occupied at start of day.
    pub yesterday_rooms: i64,
    /// Foreign guests resident at start of day.
    pub yesterday_foreign: i64,
    /// Domestic guests resident at start of day.
    pub yesterday_local: i64,

    /// Rooms occupied at end of day.
    pub today_rooms: i64,
    /// Foreign guests resident at end of day.
    pub today_foreign: i64,
    /// Domestic guests resident at end of day.
    pub today_local: i64,
}

/// Coerces raw operator input to a count.
///
/// Empty or non-numeric input becomes 0; the entry form never rejects a
/// keystroke and never leaves a field undefined.
#[must_use]
pub fn parse_count(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}
