use axum::{extract::{State, Path, Query}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{check_color, parse_date, parse_time, CreateAppointmentRequest, ListAppointmentsQuery};
use crate::api::dtos::responses::success_envelope;
use crate::domain::models::appointment::{NewAppointment, DEFAULT_COLOR, DEFAULT_TITLE};
use crate::domain::ports::AppointmentFilter;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let background_color = payload.background_color.unwrap_or_else(|| DEFAULT_COLOR.to_string());
    let border_color = payload.border_color.unwrap_or_else(|| DEFAULT_COLOR.to_string());
    check_color("background_color", &background_color)?;
    check_color("border_color", &border_color)?;

    let proposed = NewAppointment {
        username: payload.username,
        email: payload.email.filter(|e| !e.is_empty()),
        phone: payload.phone,
        store_id: payload.store,
        therapist_id: payload.therapist,
        title: payload.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        date: parse_date("date", &payload.date)?,
        start_time: parse_time("start_time", &payload.start_time)?,
        end_time: parse_time("end_time", &payload.end_time)?,
        background_color,
        border_color,
    };

    let created = match state.booking_service.book(proposed).await {
        Ok(created) => created,
        Err(AppError::Rejected(reason)) => {
            warn!("Booking rejected: {}", reason);
            return Err(AppError::Rejected(reason));
        }
        Err(e) => return Err(e),
    };

    let body = success_envelope(
        201,
        "Appointment created successfully. You will receive a message with the details.",
        "appointment",
        serde_json::to_value(&created).map_err(|_| AppError::Internal)?,
    );
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AppointmentFilter {
        store_id: query.store_id,
        therapist_id: query.therapist_id,
        date: query.date.as_deref().map(|d| parse_date("date", d)).transpose()?,
    };
    let appointments = state.appointment_repo.list(&filter).await?;
    Ok(Json(appointments))
}

pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointment_repo.find_by_id(appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.appointment_repo.delete(appointment_id).await?;
    info!("Appointment deleted: {}", appointment_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
