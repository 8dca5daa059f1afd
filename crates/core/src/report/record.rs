//! The persisted daily report row and its wire encoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vhts_shared::types::{HotelId, ReportId};

use crate::calendar::MonthRef;
use crate::ledger::types::{DailyMovement, DailyRecord, OpeningBalances};

/// One persisted day of the monthly report, as stored by the backend.
///
/// Field names on the wire follow the backend's Indonesian schema; the
/// struct keeps English names internally. `report_date` is always midnight
/// UTC of the reported day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyReportRecord {
    /// Row id, present on rows read back from the backend.
    #[serde(
        rename = "laporan_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub report_id: Option<ReportId>,

    /// Owning hotel, present on rows read back from the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,

    /// Midnight UTC of the reported day.
    #[serde(rename = "tanggal_laporan")]
    pub report_date: DateTime<Utc>,

    /// Rooms checked in.
    #[serde(rename = "kamar_checkin")]
    pub rooms_in: i64,
    /// Rooms checked out.
    #[serde(rename = "kamar_checkout")]
    pub rooms_out: i64,
    /// Rooms occupied at end of day.
    #[serde(rename = "kamar_ditempati")]
    pub rooms_today: i64,

    /// Foreign guests checked in.
    #[serde(rename = "pengunjung_international_checkin")]
    pub foreign_in: i64,
    /// Foreign guests checked out.
    #[serde(rename = "pengunjung_international_checkout")]
    pub foreign_out: i64,
    /// Foreign guests resident at end of day.
    #[serde(rename = "pengunjung_international_menetap")]
    pub foreign_today: i64,

    /// Domestic guests checked in.
    #[serde(rename = "pengunjung_lokal_checkin")]
    pub local_in: i64,
    /// Domestic guests checked out.
    #[serde(rename = "pengunjung_lokal_checkout")]
    pub local_out: i64,
    /// Domestic guests resident at end of day.
    #[serde(rename = "pengunjung_lokal_menetap")]
    pub local_today: i64,
}

impl DailyReportRecord {
    /// The movement columns of this row.
    #[must_use]
    pub const fn movement(&self) -> DailyMovement {
        DailyMovement {
            rooms_in: self.rooms_in,
            rooms_out: self.rooms_out,
            foreign_in: self.foreign_in,
            foreign_out: self.foreign_out,
            local_in: self.local_in,
            local_out: self.local_out,
        }
    }

    /// Reverse-derives the balance this row opened from.
    ///
    /// Inverts the daily balance law: `yesterday = today - in + out`.
    /// Applied to a day-1 row this recovers the previous month's closing
    /// balances.
    #[must_use]
    pub const fn derive_opening(&self) -> OpeningBalances {
        OpeningBalances {
            rooms: self.rooms_today - self.rooms_in + self.rooms_out,
            foreign: self.foreign_today - self.foreign_in + self.foreign_out,
            local: self.local_today - self.local_in + self.local_out,
        }
    }

    /// Builds a persistable row from a computed record.
    ///
    /// Returns `None` if the record's day does not exist in the month, which
    /// cannot happen for records computed from a correctly sized ledger.
    /// Freshly exported rows carry no ids; the backend assigns them.
    #[must_use]
    pub fn from_computed(month: MonthRef, record: &DailyRecord) -> Option<Self> {
        let report_date = month.midnight_utc(record.day)?;
        Some(Self {
            report_id: None,
            hotel_id: None,
            report_date,
            rooms_in: record.rooms_in,
            rooms_out: record.rooms_out,
            rooms_today: record.today_rooms,
            foreign_in: record.foreign_in,
            foreign_out: record.foreign_out,
            foreign_today: record.today_foreign,
            local_in: record.local_in,
            local_out: record.local_out,
            local_today: record.today_local,
        })
    }
}
