use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_TITLE: &str = "Appointment";
pub const DEFAULT_COLOR: &str = "#FF0000";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub phone: String,
    pub store_id: i64,
    pub therapist_id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub background_color: String,
    pub border_color: String,
}

/// A booking request that has passed type checks but not the slot rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub username: String,
    pub email: Option<String>,
    pub phone: String,
    pub store_id: i64,
    pub therapist_id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub background_color: String,
    pub border_color: String,
}

impl NewAppointment {
    pub fn slot_key(&self) -> SlotKey {
        SlotKey {
            therapist_id: self.therapist_id,
            store_id: self.store_id,
            date: self.date,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// The unit of contention: one therapist at one store on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub therapist_id: i64,
    pub store_id: i64,
    pub date: NaiveDate,
}

/// Half-open `[start, end)` interval within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct TimeRange {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeRange {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self { start_time, end_time }
    }

    pub fn is_empty(&self) -> bool {
        self.start_time >= self.end_time
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// `#RRGGBB` only, matching the seven-character color columns.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
