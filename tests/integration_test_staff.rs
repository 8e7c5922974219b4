mod common;

use axum::http::StatusCode;
use common::{parse_body, staff_member, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_create_staff_resolves_mixed_store_identifiers() {
    let app = TestApp::new().await;
    let by_id = app.create_store("East").await;
    let by_numeric_string = app.create_store("West").await;
    let by_name = app.create_store("Central").await;

    let res = app.request("POST", "/api/v1/staff", Some(json!({
        "staff": [staff_member("dana"), staff_member("eli")],
        "stores": [by_id, by_numeric_string.to_string(), "Central"]
    }))).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["message"], "Staff member(s) created and assigned to stores successfully");
    let staff = body["staff"].as_array().unwrap();
    assert_eq!(staff.len(), 2);
    for member in staff {
        assert_eq!(member["stores"], json!([by_id, by_numeric_string, by_name]));
        assert_eq!(member["active"], false);
    }
    assert_eq!(staff[0]["schedule"]["monday"][0], "09:00-17:00");
}

#[tokio::test]
async fn test_create_staff_requires_stores() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/v1/staff", Some(json!({
        "staff": [staff_member("fay")],
        "stores": []
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "stores: This field is required.");

    let res = app.request("POST", "/api/v1/staff", Some(json!({
        "staff": [staff_member("fay")]
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_store_identifiers_are_reported() {
    let app = TestApp::new().await;
    app.create_store("Known").await;

    let cases = [
        (json!(404), "Store with ID '404' does not exist."),
        (json!("405"), "Store with ID '405' does not exist."),
        (json!("Nowhere"), "Store with name 'Nowhere' does not exist."),
    ];

    for (store_ref, message) in cases {
        let res = app.request("POST", "/api/v1/staff", Some(json!({
            "staff": [staff_member("gus")],
            "stores": ["Known", store_ref]
        }))).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_body(res).await["error"], message);
    }

    let res = app.request("GET", "/api/v1/staff", None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = TestApp::new().await;
    let store = app.create_store("Solo").await;
    app.create_therapist("hana", json!([store])).await;

    let res = app.request("POST", "/api/v1/staff", Some(json!({
        "staff": [staff_member("hana")],
        "stores": [store]
    }))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_staff_replaces_affiliations() {
    let app = TestApp::new().await;
    let first = app.create_store("First").await;
    let second = app.create_store("Second").await;
    let therapist = app.create_therapist("ivy", json!([first])).await;

    let res = app.request("PUT", &format!("/api/v1/staff/{}", therapist), Some(json!({
        "role": "senior therapist",
        "active": true,
        "stores": ["Second"]
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["role"], "senior therapist");
    assert_eq!(body["active"], true);
    assert_eq!(body["stores"], json!([second]));

    let res = app.book(first, therapist, "2030-03-04", "10:00", "11:00").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let res = app.book(second, therapist, "2030-03-04", "10:00", "11:00").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_failed_update_leaves_affiliations_untouched() {
    let app = TestApp::new().await;
    let first = app.create_store("Old Town").await;
    let second = app.create_store("New Town").await;
    app.create_therapist("taken", json!([first])).await;
    let mover = app.create_therapist("mover", json!([first])).await;

    let res = app.request("PUT", &format!("/api/v1/staff/{}", mover), Some(json!({
        "username": "taken",
        "stores": [second]
    }))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.request("GET", &format!("/api/v1/staff/{}", mover), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["username"], "mover");
    assert_eq!(body["stores"], json!([first]));
}

#[tokio::test]
async fn test_delete_staff() {
    let app = TestApp::new().await;
    let store = app.create_store("Quiet").await;
    let therapist = app.create_therapist("jo", json!([store])).await;

    let res = app.request("DELETE", &format!("/api/v1/staff/{}", therapist), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", &format!("/api/v1/staff/{}", therapist), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("DELETE", &format!("/api/v1/staff/{}", therapist), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
