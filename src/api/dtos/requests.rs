use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;

use crate::domain::models::appointment::is_hex_color;
use crate::domain::services::store_resolver::StoreRef;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct CreateStoreRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub lunch_start_time: String,
    pub lunch_end_time: String,
    pub subscribe: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateStoreRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_days: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub lunch_start_time: Option<String>,
    pub lunch_end_time: Option<String>,
    pub subscribe: Option<bool>,
}

#[derive(Deserialize)]
pub struct StaffMemberRequest {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    pub active: Option<bool>,
    pub role: String,
    #[serde(default)]
    pub schedule: serde_json::Value,
}

#[derive(Deserialize)]
pub struct CreateStaffRequest {
    #[serde(default)]
    pub staff: Vec<StaffMemberRequest>,
    #[serde(default)]
    pub stores: Vec<StoreRef>,
}

#[derive(Deserialize)]
pub struct UpdateStaffRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
    pub role: Option<String>,
    pub schedule: Option<serde_json::Value>,
    pub stores: Option<Vec<StoreRef>>,
}

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub username: String,
    pub email: Option<String>,
    pub phone: String,
    #[serde(alias = "store_id")]
    pub store: i64,
    #[serde(alias = "therapist_id")]
    pub therapist: i64,
    pub title: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
}

#[derive(Deserialize)]
pub struct ListAppointmentsQuery {
    pub store_id: Option<i64>,
    pub therapist_id: Option<i64>,
    pub date: Option<String>,
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected YYYY-MM-DD)", field)))
}

pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected HH:MM)", field)))
}

pub fn check_color(field: &str, value: &str) -> Result<(), AppError> {
    if !is_hex_color(value) {
        return Err(AppError::Validation(format!("Invalid {} (expected #RRGGBB)", field)));
    }
    Ok(())
}

pub fn check_opening_days(days: &[String]) -> Result<(), AppError> {
    if let Some(bad) = days.iter().find(|d| d.parse::<Weekday>().is_err()) {
        return Err(AppError::Validation(format!("Invalid opening day: {}", bad)));
    }
    Ok(())
}
