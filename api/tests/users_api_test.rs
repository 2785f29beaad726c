//! HTTP tests for the user directory endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use common::*;
use si_api::create_app;

#[actix_web::test]
async fn test_create_and_fetch_user() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (status, created) = send(&app, post("/users", None, user_body("Alice", "alice@x.com")).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], "alice@x.com");

    let id = id_of(&created);
    let (status, fetched) = send(&app, get(&format!("/users/{}", id), None).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, all) = send(&app, get("/users", None).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&all), vec![id]);
}

#[actix_web::test]
async fn test_missing_name_defaults_to_email() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (status, created) = send(&app, post("/users", None, json!({"email": "bob@x.com"})).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "bob@x.com");
}

#[actix_web::test]
async fn test_duplicate_email_conflicts() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    send(&app, post("/users", None, user_body("Alice", "alice@x.com")).to_request()).await;
    let (status, body) = send(&app, post("/users", None, user_body("Other", "alice@x.com")).to_request()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_web::test]
async fn test_invalid_email_reports_field() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (status, body) = send(&app, post("/users", None, json!({"name": "Alice"})).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());

    let (status, _) = send(&app, post("/users", None, user_body("Alice", "not-an-email")).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_user_email_rules() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (_, alice) = send(&app, post("/users", None, user_body("Alice", "alice@x.com")).to_request()).await;
    send(&app, post("/users", None, user_body("Bob", "bob@x.com")).to_request()).await;
    let uri = format!("/users/{}", id_of(&alice));

    // Own email is not a conflict
    let (status, same) = send(&app, patch(&uri, None, json!({"email": "alice@x.com"})).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(same["name"], "Alice");

    let (status, _) = send(&app, patch(&uri, None, json!({"email": "bob@x.com"})).to_request()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, renamed) = send(&app, patch(&uri, None, json!({"name": "Alicia"})).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Alicia");
    assert_eq!(renamed["email"], "alice@x.com");

    let (status, _) = send(&app, patch("/users/999", None, json!({"name": "Ghost"})).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_user() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (_, alice) = send(&app, post("/users", None, user_body("Alice", "alice@x.com")).to_request()).await;
    let uri = format!("/users/{}", id_of(&alice));

    let (status, body) = send(&app, delete(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send(&app, get(&uri, None).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, _) = send(&app, delete(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_numeric_id_is_rejected() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (status, body) = send(&app, get("/users/abc", None).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let app = test::init_service(create_app(memory_state(), &test_config())).await;

    let (status, health) = send(&app, get("/health", None).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["storage"], "memory");

    let (status, body) = send(&app, get("/nowhere", None).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
