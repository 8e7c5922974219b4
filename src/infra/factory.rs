use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::SmsService;
use crate::domain::services::booking_service::BookingService;
use crate::error::AppError;
use crate::infra::repositories::{
    sqlite_appointment_repo::SqliteAppointmentRepo, sqlite_staff_repo::SqliteStaffRepo,
    sqlite_store_repo::SqliteStoreRepo,
};
use crate::infra::sms::http_sms_service::{HttpSmsService, LogSmsService};
use crate::state::AppState;

pub async fn connect_sqlite(database_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run SQLite migrations: {}", e)))?;

    Ok(pool)
}

pub fn sms_service_from_config(config: &Config) -> Arc<dyn SmsService> {
    match &config.sms_service_url {
        Some(url) => {
            info!("SMS confirmations go through {}", url);
            Arc::new(HttpSmsService::new(url.clone(), config.sms_service_token.clone(), config.sms_sender.clone()))
        }
        None => {
            info!("SMS_SERVICE_URL not set, confirmations are only logged");
            Arc::new(LogSmsService)
        }
    }
}

pub fn build_state(config: &Config, pool: SqlitePool, sms_service: Arc<dyn SmsService>) -> AppState {
    let store_repo = Arc::new(SqliteStoreRepo::new(pool.clone()));
    let staff_repo = Arc::new(SqliteStaffRepo::new(pool.clone()));
    let appointment_repo = Arc::new(SqliteAppointmentRepo::new(pool));

    let booking_service = Arc::new(BookingService::new(
        store_repo.clone(),
        staff_repo.clone(),
        appointment_repo.clone(),
        appointment_repo.clone(),
        sms_service,
    ));

    AppState {
        config: config.clone(),
        store_repo,
        staff_repo,
        appointment_repo,
        booking_service,
    }
}

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let pool = connect_sqlite(&config.database_url).await?;
    let sms_service = sms_service_from_config(config);
    Ok(build_state(config, pool, sms_service))
}
