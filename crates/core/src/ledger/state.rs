//! Mutable working set for one month of occupancy data.

use crate::calendar::MonthRef;
use crate::ledger::types::{DailyMovement, OpeningBalances};

/// The editable state behind one monthly balance sheet.
///
/// Holds exactly one [`DailyMovement`] slot per day of the month plus the
/// opening balances. Derived values (running balances, totals) never live
/// here; they are recomputed from this state on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthLedger {
    month: MonthRef,
    opening: OpeningBalances,
    movements: Vec<DailyMovement>,
}

impl MonthLedger {
    /// Creates an all-zero ledger sized to the given month.
    #[must_use]
    pub fn empty(month: MonthRef) -> Self {
        Self {
            month,
            opening: OpeningBalances::default(),
            movements: vec![DailyMovement::default(); month.day_count() as usize],
        }
    }

    /// Assembles a ledger from already-loaded parts.
    ///
    /// The movement vector is resized to the month's day count: short input
    /// is padded with zero days, excess days are dropped.
    #[must_use]
    pub fn from_parts(
        month: MonthRef,
        opening: OpeningBalances,
        mut movements: Vec<DailyMovement>,
    ) -> Self {
        movements.resize(month.day_count() as usize, DailyMovement::default());
        Self {
            month,
            opening,
            movements,
        }
    }

    /// The month this ledger covers.
    #[must_use]
    pub const fn month(&self) -> MonthRef {
        self.month
    }

    /// Opening balances carried in from the previous month.
    #[must_use]
    pub const fn opening(&self) -> OpeningBalances {
        self.opening
    }

    /// One movement slot per day, in day order.
    #[must_use]
    pub fn movements(&self) -> &[DailyMovement] {
        &self.movements
    }

    /// Replaces the opening balances.
    pub const fn set_opening(&mut self, opening: OpeningBalances) {
        self.opening = opening;
    }

    /// Replaces the movements of a 1-based day. Days outside the month are
    /// ignored.
    pub fn set_movement(&mut self, day: u32, movement: DailyMovement) {
        if let Some(slot) = self.movement_mut(day) {
            *slot = movement;
        }
    }

    /// Mutable access to the movement slot of a 1-based day.
    pub fn movement_mut(&mut self, day: u32) -> Option<&mut DailyMovement> {
        if day == 0 {
            return None;
        }
        self.movements.get_mut(day as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb_2024() -> MonthRef {
        MonthRef::new(1, 2024).unwrap()
    }

    #[test]
    fn test_empty_ledger_sized_to_month() {
        let ledger = MonthLedger::empty(feb_2024());
        assert_eq!(ledger.movements().len(), 29);
        assert!(ledger.movements().iter().all(|m| *m == DailyMovement::default()));
        assert_eq!(ledger.opening(), OpeningBalances::default());
    }

    #[test]
    fn test_from_parts_pads_and_truncates() {
        let month = feb_2024();
        let short = MonthLedger::from_parts(month, OpeningBalances::default(), vec![]);
        assert_eq!(short.movements().len(), 29);

        let long = MonthLedger::from_parts(
            month,
            OpeningBalances::default(),
            vec![DailyMovement::default(); 40],
        );
        assert_eq!(long.movements().len(), 29);
    }

    #[test]
    fn test_set_movement_in_and_out_of_range() {
        let mut ledger = MonthLedger::empty(feb_2024());
        let movement = DailyMovement {
            rooms_in: 5,
            ..DailyMovement::default()
        };

        ledger.set_movement(1, movement);
        assert_eq!(ledger.movements()[0], movement);

        // Out-of-range days are silently ignored.
        ledger.set_movement(0, movement);
        ledger.set_movement(30, movement);
        assert_eq!(ledger.movements()[28], DailyMovement::default());
    }

    #[test]
    fn test_movement_mut_edits_in_place() {
        let mut ledger = MonthLedger::empty(feb_2024());
        if let Some(slot) = ledger.movement_mut(15) {
            slot.foreign_in = 3;
        }
        assert_eq!(ledger.movements()[14].foreign_in, 3);
        assert!(ledger.movement_mut(0).is_none());
        assert!(ledger.movement_mut(30).is_none());
    }
}
