//! Shared setup for the HTTP tests: an app over the in-memory repositories
//! plus request helpers.

#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use si_api::AppState;
use si_core::domain::entities::{Item, User};
use si_core::repositories::{
    ItemRepository, MemoryRepositories, MockBookingRepository, MockCommentRepository, MockItemRepository,
    MockUserRepository, UserRepository,
};
use si_shared::{AppConfig, Id};

pub const USER_HEADER: &str = "X-Sharer-User-Id";

pub type MemoryState = AppState<MockUserRepository, MockItemRepository, MockBookingRepository, MockCommentRepository>;

pub fn memory_state() -> web::Data<MemoryState> {
    state_over(MemoryRepositories::new())
}

fn state_over(repos: MemoryRepositories) -> web::Data<MemoryState> {
    web::Data::new(AppState::new(
        repos.users,
        repos.items,
        repos.bookings,
        repos.comments,
        "memory",
    ))
}

/// Alice owns an available drill; Bob is a second user
pub struct Seeded {
    pub state: web::Data<MemoryState>,
    pub alice: Id,
    pub bob: Id,
    pub drill: Id,
}

pub async fn seeded_state() -> Seeded {
    let repos = MemoryRepositories::new();
    let alice = repos.users.create(User::new("Alice", "alice@x.com")).await.unwrap();
    let bob = repos.users.create(User::new("Bob", "bob@x.com")).await.unwrap();
    let drill = repos
        .items
        .create(Item::new(alice.id, "Drill", "Cordless drill with two batteries", true))
        .await
        .unwrap();

    Seeded {
        state: state_over(repos),
        alice: alice.id,
        bob: bob.id,
        drill: drill.id,
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::development()
}

pub fn get(uri: &str, caller: Option<Id>) -> test::TestRequest {
    with_caller(test::TestRequest::get().uri(uri), caller)
}

pub fn post(uri: &str, caller: Option<Id>, body: Value) -> test::TestRequest {
    with_caller(test::TestRequest::post().uri(uri), caller).set_json(body)
}

pub fn patch(uri: &str, caller: Option<Id>, body: Value) -> test::TestRequest {
    with_caller(test::TestRequest::patch().uri(uri), caller).set_json(body)
}

pub fn delete(uri: &str) -> test::TestRequest {
    test::TestRequest::delete().uri(uri)
}

fn with_caller(request: test::TestRequest, caller: Option<Id>) -> test::TestRequest {
    match caller {
        Some(id) => request.insert_header((USER_HEADER, id.to_string())),
        None => request,
    }
}

/// Sends the request and returns the status with the JSON body, or `Null`
/// for an empty body
pub async fn send<S, R, B>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

pub fn hours_from_now(h: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(h)
}

pub fn user_body(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email })
}

pub fn drill_body() -> Value {
    json!({
        "name": "Drill",
        "description": "Cordless drill with two batteries",
        "available": true
    })
}

pub fn booking_body(item_id: Id, start: DateTime<Utc>, end: DateTime<Utc>) -> Value {
    json!({ "itemId": item_id, "start": ts(start), "end": ts(end) })
}

pub fn id_of(body: &Value) -> Id {
    body["id"].as_i64().unwrap()
}

pub fn ids_of(body: &Value) -> Vec<Id> {
    body.as_array().unwrap().iter().map(id_of).collect()
}
