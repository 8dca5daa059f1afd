//! Rebuilding ledger state from persisted report rows.

pub mod loader;


pub use loader::ReconciliationLoader;
