//! Core occupancy-ledger logic for VHTS.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, the monthly recurrence, and reconciliation live here.
//!
//! # Modules
//!
//! - `calendar` - Calendar month sizing and date helpers
//! - `ledger` - Daily movements, balances, and the carry-forward recurrence
//! - `reconcile` - Rebuilding ledger state from persisted report rows
//! - `report` - Wire report rows, monthly totals, and the occupancy rate
//! - `engine` - The state owner: reconciliation triggers, memoized recompute, change notification

pub mod calendar;
pub mod engine;
pub mod ledger;
pub mod reconcile;
pub mod report;
