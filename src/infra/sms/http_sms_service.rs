use crate::domain::ports::SmsService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

pub struct HttpSmsService {
    client: Client,
    api_url: String,
    api_key: String,
    sender: String,
}

impl HttpSmsService {
    pub fn new(api_url: String, api_key: String, sender: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url,
            api_key,
            sender,
        }
    }
}

#[derive(Serialize)]
struct SmsPayload<'a> {
    from: &'a str,
    to: &'a str,
    body: &'a str,
}

#[async_trait]
impl SmsService for HttpSmsService {
    async fn send(&self, to: &str, body: &str) -> Result<(), AppError> {
        let payload = SmsPayload {
            from: &self.sender,
            to,
            body,
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("SMS gateway connection error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("SMS gateway failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        info!("SMS sent to {}", to);
        Ok(())
    }
}

/// Used when no gateway is configured; messages only reach the log.
pub struct LogSmsService;

#[async_trait]
impl SmsService for LogSmsService {
    async fn send(&self, to: &str, body: &str) -> Result<(), AppError> {
        info!(recipient = %to, "SMS gateway not configured, message not delivered: {}", body);
        Ok(())
    }
}
