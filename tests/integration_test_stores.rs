mod common;

use axum::http::StatusCode;
use common::{parse_body, store_payload, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_store() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/stores", Some(store_payload("Downtown Spa"))).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Store created successfully");
    assert_eq!(body["store"]["name"], "Downtown Spa");
    assert_eq!(body["store"]["subscribe"], false);
    assert_eq!(body["store"]["lunch_start_time"], "12:00:00");

    let id = body["store"]["id"].as_i64().unwrap();
    let res = app.request("GET", &format!("/api/v1/stores/{}", id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let store = parse_body(res).await;
    assert_eq!(store["opening_days"], json!(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]));

    let res = app.request("GET", "/api/v1/stores", None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_store_name_is_rejected() {
    let app = TestApp::new().await;
    app.create_store("Riverside").await;

    let res = app.request("POST", "/api/v1/stores", Some(store_payload("Riverside"))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(parse_body(res).await["error"], "A store with this name already exists.");
}

#[tokio::test]
async fn test_store_hours_must_be_ordered() {
    let app = TestApp::new().await;

    let mut payload = store_payload("Lunch Mixup");
    payload["lunch_start_time"] = json!("13:00");
    payload["lunch_end_time"] = json!("12:00");
    let res = app.request("POST", "/api/v1/stores", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut payload = store_payload("Late Lunch");
    payload["lunch_end_time"] = json!("19:00");
    let res = app.request("POST", "/api/v1/stores", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let id = app.create_store("Fine Hours").await;
    let res = app.request("PUT", &format!("/api/v1/stores/{}", id), Some(json!({"end_time": "11:00"}))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_opening_day_is_rejected() {
    let app = TestApp::new().await;

    let mut payload = store_payload("Odd Days");
    payload["opening_days"] = json!(["Monday", "Someday"]);
    let res = app.request("POST", "/api/v1/stores", Some(payload)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_store_checks_name_uniqueness() {
    let app = TestApp::new().await;
    app.create_store("North").await;
    let south = app.create_store("South").await;

    let res = app.request("PUT", &format!("/api/v1/stores/{}", south), Some(json!({"name": "North"}))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.request("PUT", &format!("/api/v1/stores/{}", south), Some(json!({
        "name": "South Annex",
        "subscribe": true
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "South Annex");
    assert_eq!(body["subscribe"], true);
}

#[tokio::test]
async fn test_store_details_include_staff() {
    let app = TestApp::new().await;
    let store = app.create_store("Harbor").await;
    let other = app.create_store("Hills").await;
    app.create_therapist("alice", json!([store])).await;
    app.create_therapist("bob", json!([other])).await;

    let res = app.request("GET", &format!("/api/v1/stores/{}/details", store), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Store details retrieved successfully");
    assert_eq!(body["store"]["name"], "Harbor");

    let staff = body["store"]["staff"].as_array().unwrap();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0]["username"], "alice");
}

#[tokio::test]
async fn test_deleting_store_cascades_appointments() {
    let app = TestApp::new().await;
    let store = app.create_store("Closing Soon").await;
    let therapist = app.create_therapist("carol", json!([store])).await;

    let res = app.book(store, therapist, "2030-03-04", "10:00", "11:00").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let appointment_id = parse_body(res).await["appointment"]["id"].as_i64().unwrap();

    let res = app.request("DELETE", &format!("/api/v1/stores/{}", store), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", &format!("/api/v1/appointments/{}", appointment_id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("GET", &format!("/api/v1/staff/{}", therapist), None).await;
    assert_eq!(parse_body(res).await["stores"], json!([]));

    let res = app.request("DELETE", &format!("/api/v1/stores/{}", store), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
