use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_days: Json<Vec<String>>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub lunch_start_time: NaiveTime,
    pub lunch_end_time: NaiveTime,
    pub subscribe: bool,
}

/// Store fields before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_days: Vec<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub lunch_start_time: NaiveTime,
    pub lunch_end_time: NaiveTime,
    pub subscribe: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyHours {
    pub open: NaiveTime,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
    pub close: NaiveTime,
}

impl DailyHours {
    /// Opening, lunch break and closing must be strictly ordered.
    pub fn is_well_ordered(&self) -> bool {
        self.open < self.lunch_start && self.lunch_start < self.lunch_end && self.lunch_end < self.close
    }
}

impl Store {
    pub fn hours(&self) -> DailyHours {
        DailyHours {
            open: self.start_time,
            lunch_start: self.lunch_start_time,
            lunch_end: self.lunch_end_time,
            close: self.end_time,
        }
    }
}

impl NewStore {
    pub fn hours(&self) -> DailyHours {
        DailyHours {
            open: self.start_time,
            lunch_start: self.lunch_start_time,
            lunch_end: self.lunch_end_time,
            close: self.end_time,
        }
    }
}
