#![allow(dead_code)]

use store_booking::{
    api::router::create_router,
    config::Config,
    domain::ports::SmsService,
    error::AppError,
    infra::factory::{build_state, connect_sqlite},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Default)]
pub struct RecordingSmsService {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSmsService {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Confirmations are sent from a detached task, so wait for them to land.
    pub async fn wait_for_messages(&self, count: usize) -> Vec<(String, String)> {
        for _ in 0..200 {
            let messages = self.messages();
            if messages.len() >= count {
                return messages;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.messages()
    }
}

#[async_trait]
impl SmsService for RecordingSmsService {
    async fn send(&self, to: &str, body: &str) -> Result<(), AppError> {
        self.sent.lock().unwrap().push((to.to_string(), body.to_string()));
        Ok(())
    }
}

pub struct FailingSmsService;

#[async_trait]
impl SmsService for FailingSmsService {
    async fn send(&self, _to: &str, _body: &str) -> Result<(), AppError> {
        Err(AppError::InternalWithMsg("gateway unreachable".into()))
    }
}

pub struct HangingSmsService;

#[async_trait]
impl SmsService for HangingSmsService {
    async fn send(&self, _to: &str, _body: &str) -> Result<(), AppError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub sms: Arc<RecordingSmsService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let sms = Arc::new(RecordingSmsService::default());
        Self::with_sms(sms.clone(), sms).await
    }

    pub async fn with_sms(sms_service: Arc<dyn SmsService>, sms: Arc<RecordingSmsService>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let pool = connect_sqlite(&db_url).await.expect("Failed to set up test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            sms_service_url: None,
            sms_service_token: String::new(),
            sms_sender: "Test".to_string(),
        };

        let state = Arc::new(build_state(&config, pool.clone(), sms_service));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            sms,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        send(&self.router, method, uri, body).await
    }

    pub async fn create_store(&self, name: &str) -> i64 {
        let res = self.request("POST", "/api/v1/stores", Some(store_payload(name))).await;
        assert_eq!(res.status(), 201, "store creation failed");
        parse_body(res).await["store"]["id"].as_i64().unwrap()
    }

    pub async fn create_therapist(&self, username: &str, stores: Value) -> i64 {
        let res = self.request("POST", "/api/v1/staff", Some(json!({
            "staff": [staff_member(username)],
            "stores": stores
        }))).await;
        assert_eq!(res.status(), 201, "staff creation failed");
        parse_body(res).await["staff"][0]["id"].as_i64().unwrap()
    }

    pub async fn book(&self, store: i64, therapist: i64, date: &str, start: &str, end: &str) -> Response {
        self.request("POST", "/api/v1/appointments", Some(appointment_payload(store, therapist, date, start, end))).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub fn appointment_payload(store: i64, therapist: i64, date: &str, start: &str, end: &str) -> Value {
    json!({
        "username": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+15550100",
        "store": store,
        "therapist": therapist,
        "date": date,
        "start_time": start,
        "end_time": end
    })
}

pub fn store_payload(name: &str) -> Value {
    json!({
        "name": name,
        "address": "1 Main Street",
        "phone": "+15550000",
        "email": "front@example.com",
        "opening_days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "start_time": "09:00",
        "end_time": "18:00",
        "lunch_start_time": "12:00",
        "lunch_end_time": "13:00"
    })
}

pub fn staff_member(username: &str) -> Value {
    json!({
        "username": username,
        "first_name": "Sam",
        "last_name": "Lee",
        "email": format!("{}@example.com", username),
        "phone": "+15550111",
        "role": "therapist",
        "schedule": {"monday": ["09:00-17:00"]}
    })
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
