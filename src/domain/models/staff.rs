use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Staff {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
    pub role: String,
    pub schedule: Json<serde_json::Value>,
    #[sqlx(skip)]
    pub stores: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct NewStaff {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
    pub role: String,
    pub schedule: serde_json::Value,
}
