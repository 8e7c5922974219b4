use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{check_opening_days, parse_time, CreateStoreRequest, UpdateStoreRequest};
use crate::api::dtos::responses::{success_envelope, StoreDetails};
use crate::domain::models::store::{DailyHours, NewStore};
use crate::error::AppError;
use sqlx::types::Json as DbJson;
use std::sync::Arc;
use tracing::info;

fn check_hours(hours: DailyHours) -> Result<(), AppError> {
    if !hours.is_well_ordered() {
        return Err(AppError::Validation(
            "Store hours must satisfy opening < lunch start < lunch end < closing".into()
        ));
    }
    Ok(())
}

pub async fn create_store(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.store_repo.find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::Conflict("A store with this name already exists.".into()));
    }
    check_opening_days(&payload.opening_days)?;

    let store = NewStore {
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
        email: payload.email,
        opening_days: payload.opening_days,
        start_time: parse_time("start_time", &payload.start_time)?,
        end_time: parse_time("end_time", &payload.end_time)?,
        lunch_start_time: parse_time("lunch_start_time", &payload.lunch_start_time)?,
        lunch_end_time: parse_time("lunch_end_time", &payload.lunch_end_time)?,
        subscribe: payload.subscribe.unwrap_or(false),
    };
    check_hours(store.hours())?;

    let created = state.store_repo.create(&store).await?;
    info!("Created store {} ({})", created.id, created.name);

    let body = success_envelope(201, "Store created successfully", "store", serde_json::to_value(&created).map_err(|_| AppError::Internal)?);
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn list_stores(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let stores = state.store_repo.list().await?;
    Ok(Json(stores))
}

pub async fn get_store(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store_repo.find_by_id(store_id).await?
        .ok_or(AppError::NotFound("Store not found".into()))?;
    Ok(Json(store))
}

pub async fn get_store_details(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store_repo.find_by_id(store_id).await?
        .ok_or(AppError::NotFound("Store not found".into()))?;
    let staff = state.staff_repo.list_by_store(store.id).await?;

    let details = serde_json::to_value(StoreDetails { store, staff }).map_err(|_| AppError::Internal)?;
    Ok(Json(success_envelope(200, "Store details retrieved successfully", "store", details)))
}

pub async fn update_store(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<i64>,
    Json(payload): Json<UpdateStoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store_repo.find_by_id(store_id).await?
        .ok_or(AppError::NotFound("Store not found".into()))?;

    if let Some(name) = payload.name
        && name != store.name {
        if state.store_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict("A store with this name already exists.".into()));
        }
        store.name = name;
    }
    if let Some(address) = payload.address { store.address = address; }
    if let Some(phone) = payload.phone { store.phone = phone; }
    if let Some(email) = payload.email { store.email = email; }
    if let Some(days) = payload.opening_days {
        check_opening_days(&days)?;
        store.opening_days = DbJson(days);
    }
    if let Some(t) = payload.start_time { store.start_time = parse_time("start_time", &t)?; }
    if let Some(t) = payload.end_time { store.end_time = parse_time("end_time", &t)?; }
    if let Some(t) = payload.lunch_start_time { store.lunch_start_time = parse_time("lunch_start_time", &t)?; }
    if let Some(t) = payload.lunch_end_time { store.lunch_end_time = parse_time("lunch_end_time", &t)?; }
    if let Some(subscribe) = payload.subscribe { store.subscribe = subscribe; }

    check_hours(store.hours())?;

    let updated = state.store_repo.update(&store).await?;
    info!("Store updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_store(
    State(state): State<Arc<AppState>>,
    Path(store_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.store_repo.delete(store_id).await?;
    info!("Store deleted: {}", store_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
