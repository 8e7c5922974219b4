use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateStaffRequest, UpdateStaffRequest};
use crate::api::dtos::responses::success_envelope;
use crate::domain::models::staff::NewStaff;
use crate::domain::services::store_resolver::resolve_stores;
use crate::error::AppError;
use sqlx::types::Json as DbJson;
use std::sync::Arc;
use tracing::info;

pub async fn create_staff(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.stores.is_empty() {
        return Err(AppError::Validation("stores: This field is required.".into()));
    }

    let store_ids = resolve_stores(state.store_repo.as_ref(), &payload.stores).await?;

    let mut created = Vec::with_capacity(payload.staff.len());
    for member in payload.staff {
        let new_staff = NewStaff {
            username: member.username,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            active: member.active.unwrap_or(false),
            role: member.role,
            schedule: if member.schedule.is_null() { serde_json::json!({}) } else { member.schedule },
        };

        let staff = state.staff_repo.create(&new_staff, &store_ids).await?;
        info!("Created staff member {} ({}) for stores {:?}", staff.id, staff.username, staff.stores);
        created.push(staff);
    }

    let body = success_envelope(
        201,
        "Staff member(s) created and assigned to stores successfully",
        "staff",
        serde_json::to_value(&created).map_err(|_| AppError::Internal)?,
    );
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn list_staff(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff_repo.list().await?;
    Ok(Json(staff))
}

pub async fn get_staff(
    State(state): State<Arc<AppState>>,
    Path(staff_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff_repo.find_by_id(staff_id).await?
        .ok_or(AppError::NotFound("Staff member not found".into()))?;
    Ok(Json(staff))
}

pub async fn update_staff(
    State(state): State<Arc<AppState>>,
    Path(staff_id): Path<i64>,
    Json(payload): Json<UpdateStaffRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut staff = state.staff_repo.find_by_id(staff_id).await?
        .ok_or(AppError::NotFound("Staff member not found".into()))?;

    if let Some(username) = payload.username { staff.username = username; }
    if let Some(first_name) = payload.first_name { staff.first_name = first_name; }
    if let Some(last_name) = payload.last_name { staff.last_name = last_name; }
    if let Some(email) = payload.email { staff.email = email; }
    if let Some(phone) = payload.phone { staff.phone = phone; }
    if let Some(active) = payload.active { staff.active = active; }
    if let Some(role) = payload.role { staff.role = role; }
    if let Some(schedule) = payload.schedule { staff.schedule = DbJson(schedule); }

    let store_ids = match payload.stores {
        Some(stores) => Some(resolve_stores(state.store_repo.as_ref(), &stores).await?),
        None => None,
    };

    let updated = state.staff_repo.update(&staff, store_ids.as_deref()).await?;
    info!("Staff member updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    Path(staff_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.staff_repo.delete(staff_id).await?;
    info!("Deleted staff member {}", staff_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
