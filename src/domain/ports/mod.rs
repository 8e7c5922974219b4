use std::collections::HashSet;

use crate::domain::models::{
    appointment::{Appointment, NewAppointment, TimeRange},
    staff::{NewStaff, Staff},
    store::{NewStore, Store},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, store: &NewStore) -> Result<Store, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Store>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Store>, AppError>;
    async fn list(&self) -> Result<Vec<Store>, AppError>;
    async fn update(&self, store: &Store) -> Result<Store, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn create(&self, staff: &NewStaff, store_ids: &[i64]) -> Result<Staff, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, AppError>;
    async fn list(&self) -> Result<Vec<Staff>, AppError>;
    async fn list_by_store(&self, store_id: i64) -> Result<Vec<Staff>, AppError>;
    /// Field changes and, when given, the replacement store set commit together.
    async fn update(&self, staff: &Staff, store_ids: Option<&[i64]>) -> Result<Staff, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[derive(Debug, Default, Clone)]
pub struct AppointmentFilter {
    pub store_id: Option<i64>,
    pub therapist_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Inserts unless an overlapping appointment exists for the same slot key.
    /// `None` means the slot was taken between validation and insert.
    async fn create_if_free(&self, appointment: &NewAppointment) -> Result<Option<Appointment>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError>;
    async fn list(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Read side the appointment validator depends on.
#[async_trait]
pub trait BookingLookup: Send + Sync {
    async fn stores_for_therapist(&self, therapist_id: i64) -> Result<HashSet<i64>, AppError>;
    async fn find_appointments(&self, therapist_id: i64, store_id: i64, date: NaiveDate) -> Result<Vec<TimeRange>, AppError>;
}

#[async_trait]
pub trait SmsService: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), AppError>;
}
