//! Property-based tests for the carry-forward recurrence.

use proptest::prelude::*;

use crate::ledger::recurrence::RecurrenceEngine;
use crate::ledger::types::{DailyMovement, OpeningBalances};

fn arb_movement() -> impl Strategy<Value = DailyMovement> {
    (
        0_i64..500,
        0_i64..500,
        0_i64..500,
        0_i64..500,
        0_i64..500,
        0_i64..500,
    )
        .prop_map(
            |(rooms_in, rooms_out, foreign_in, foreign_out, local_in, local_out)| DailyMovement {
                rooms_in,
                rooms_out,
                foreign_in,
                foreign_out,
                local_in,
                local_out,
            },
        )
}

fn arb_opening() -> impl Strategy<Value = OpeningBalances> {
    (0_i64..1000, 0_i64..1000, 0_i64..1000).prop_map(|(rooms, foreign, local)| OpeningBalances {
        rooms,
        foreign,
        local,
    })
}

fn arb_month() -> impl Strategy<Value = Vec<DailyMovement>> {
    prop::collection::vec(arb_movement(), 0..=31)
}

proptest! {
    /// Property: each day's closing balance equals its opening balance plus
    /// arrivals minus departures, in every category.
    #[test]
    fn prop_daily_balance_law(opening in arb_opening(), movements in arb_month()) {
        let records = RecurrenceEngine::compute(&opening, &movements);

        for record in &records {
            prop_assert_eq!(
                record.today_rooms,
                record.yesterday_rooms + record.rooms_in - record.rooms_out
            );
            prop_assert_eq!(
                record.today_foreign,
                record.yesterday_foreign + record.foreign_in - record.foreign_out
            );
            prop_assert_eq!(
                record.today_local,
                record.yesterday_local + record.local_in - record.local_out
            );
        }
    }

    /// Property: records chain without gaps. Day 1 opens from the opening
    /// balances and every later day opens from the previous day's close.
    #[test]
    fn prop_carry_forward_chain(opening in arb_opening(), movements in arb_month()) {
        let records = RecurrenceEngine::compute(&opening, &movements);

        if let Some(first) = records.first() {
            prop_assert_eq!(first.yesterday_rooms, opening.rooms);
            prop_assert_eq!(first.yesterday_foreign, opening.foreign);
            prop_assert_eq!(first.yesterday_local, opening.local);
        }

        for pair in records.windows(2) {
            prop_assert_eq!(pair[1].yesterday_rooms, pair[0].today_rooms);
            prop_assert_eq!(pair[1].yesterday_foreign, pair[0].today_foreign);
            prop_assert_eq!(pair[1].yesterday_local, pair[0].today_local);
        }
    }

    /// Property: one output record per input slot, numbered 1..=n.
    #[test]
    fn prop_day_numbering(opening in arb_opening(), movements in arb_month()) {
        let records = RecurrenceEngine::compute(&opening, &movements);

        prop_assert_eq!(records.len(), movements.len());
        for (index, record) in records.iter().enumerate() {
            prop_assert_eq!(record.day as usize, index + 1);
        }
    }

    /// Property: the recurrence is a pure function of its inputs.
    #[test]
    fn prop_recompute_is_deterministic(opening in arb_opening(), movements in arb_month()) {
        let first = RecurrenceEngine::compute(&opening, &movements);
        let second = RecurrenceEngine::compute(&opening, &movements);
        prop_assert_eq!(first, second);
    }

    /// Property: the final close equals the opening balance plus the net
    /// movement over the whole month.
    #[test]
    fn prop_final_close_is_opening_plus_net(opening in arb_opening(), movements in arb_month()) {
        let records = RecurrenceEngine::compute(&opening, &movements);

        if let Some(last) = records.last() {
            let net_rooms: i64 = movements.iter().map(|m| m.rooms_in - m.rooms_out).sum();
            let net_foreign: i64 = movements.iter().map(|m| m.foreign_in - m.foreign_out).sum();
            let net_local: i64 = movements.iter().map(|m| m.local_in - m.local_out).sum();

            prop_assert_eq!(last.today_rooms, opening.rooms + net_rooms);
            prop_assert_eq!(last.today_foreign, opening.foreign + net_foreign);
            prop_assert_eq!(last.today_local, opening.local + net_local);
        }
    }
}
