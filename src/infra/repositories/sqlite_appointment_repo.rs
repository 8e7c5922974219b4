use std::collections::HashSet;

use crate::domain::models::appointment::{Appointment, NewAppointment, TimeRange};
use crate::domain::ports::{AppointmentFilter, AppointmentRepository, BookingLookup};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteAppointmentRepo {
    pool: SqlitePool,
}

impl SqliteAppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepo {
    async fn create_if_free(&self, appointment: &NewAppointment) -> Result<Option<Appointment>, AppError> {
        // One statement, so the overlap probe and the insert share SQLite's write lock.
        sqlx::query_as::<_, Appointment>(
            r#"INSERT INTO appointments (username, email, phone, store_id, therapist_id, title, date, start_time, end_time, background_color, border_color)
               SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
               WHERE NOT EXISTS (
                   SELECT 1 FROM appointments
                   WHERE therapist_id = ? AND store_id = ? AND date = ? AND start_time < ? AND end_time > ?
               )
               RETURNING *"#
        )
            .bind(&appointment.username)
            .bind(&appointment.email)
            .bind(&appointment.phone)
            .bind(appointment.store_id)
            .bind(appointment.therapist_id)
            .bind(&appointment.title)
            .bind(appointment.date)
            .bind(appointment.start_time)
            .bind(appointment.end_time)
            .bind(&appointment.background_color)
            .bind(&appointment.border_color)
            .bind(appointment.therapist_id)
            .bind(appointment.store_id)
            .bind(appointment.date)
            .bind(appointment.end_time)
            .bind(appointment.start_time)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            r#"SELECT * FROM appointments
               WHERE (? IS NULL OR store_id = ?)
                 AND (? IS NULL OR therapist_id = ?)
                 AND (? IS NULL OR date = ?)
               ORDER BY date ASC, start_time ASC"#
        )
            .bind(filter.store_id).bind(filter.store_id)
            .bind(filter.therapist_id).bind(filter.therapist_id)
            .bind(filter.date).bind(filter.date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingLookup for SqliteAppointmentRepo {
    async fn stores_for_therapist(&self, therapist_id: i64) -> Result<HashSet<i64>, AppError> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT store_id FROM staff_stores WHERE staff_id = ?")
            .bind(therapist_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(ids.into_iter().collect())
    }

    async fn find_appointments(&self, therapist_id: i64, store_id: i64, date: NaiveDate) -> Result<Vec<TimeRange>, AppError> {
        sqlx::query_as::<_, TimeRange>(
            "SELECT start_time, end_time FROM appointments WHERE therapist_id = ? AND store_id = ? AND date = ?"
        )
            .bind(therapist_id)
            .bind(store_id)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
