use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub sms_service_url: Option<String>,
    pub sms_service_token: String,
    pub sms_sender: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://store_booking.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            sms_service_url: env::var("SMS_SERVICE_URL").ok().filter(|url| !url.is_empty()),
            sms_service_token: env::var("SMS_SERVICE_TOKEN").unwrap_or_default(),
            sms_sender: env::var("SMS_SENDER").unwrap_or_else(|_| "StoreBooking".to_string()),
        }
    }
}
