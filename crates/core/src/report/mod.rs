//! Report rows, monthly totals, and the occupancy rate.

pub mod record;
pub mod service;
pub mod types;


pub use record::DailyReportRecord;
pub use service::ReportService;
pub use types::{MonthlySummary, MonthlyTotals};
