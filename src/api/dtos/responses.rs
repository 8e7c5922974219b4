use serde::Serialize;

use crate::domain::models::{staff::Staff, store::Store};

#[derive(Serialize)]
pub struct StoreDetails {
    #[serde(flatten)]
    pub store: Store,
    pub staff: Vec<Staff>,
}

/// Envelope returned by the create and detail endpoints.
pub fn success_envelope(status_code: u16, message: &str, key: &str, payload: serde_json::Value) -> serde_json::Value {
    let mut body = serde_json::json!({
        "status_code": status_code,
        "status": "success",
        "message": message,
    });
    body[key] = payload;
    body
}
