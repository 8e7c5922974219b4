use axum::{
    body::Body,
    extract::Request,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, store, staff, appointment};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Stores
        .route("/api/v1/stores", get(store::list_stores).post(store::create_store))
        .route("/api/v1/stores/{store_id}", get(store::get_store).put(store::update_store).delete(store::delete_store))
        .route("/api/v1/stores/{store_id}/details", get(store::get_store_details))

        // Staff
        .route("/api/v1/staff", get(staff::list_staff).post(staff::create_staff))
        .route("/api/v1/staff/{staff_id}", get(staff::get_staff).put(staff::update_staff).delete(staff::delete_staff))

        // Appointments
        .route("/api/v1/appointments", get(appointment::list_appointments).post(appointment::create_appointment))
        .route("/api/v1/appointments/{appointment_id}", get(appointment::get_appointment).delete(appointment::delete_appointment))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
