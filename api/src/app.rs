//! Application state and factory
//!
//! This module holds the services shared by every worker and builds the
//! Actix-web application around them.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use si_core::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};
use si_core::services::{BookingService, CommentService, ItemService, UserService};
use si_shared::types::response::{error_codes, ErrorResponse};
use si_shared::{AppConfig, HealthResponse};

use crate::handlers::ApiError;
use crate::middleware::create_cors;
use crate::routes;

/// Application state that holds shared services
pub struct AppState<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    pub users: UserService<U>,
    pub items: ItemService<U, I, B, C>,
    pub comments: CommentService<U, I, B, C>,
    pub bookings: BookingService<U, I, B>,
    /// Backend name reported by `/health`
    pub storage: String,
}

impl<U, I, B, C> AppState<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    /// Wire all services over one set of repositories
    pub fn new(users: Arc<U>, items: Arc<I>, bookings: Arc<B>, comments: Arc<C>, storage: impl Into<String>) -> Self {
        Self {
            users: UserService::new(users.clone()),
            items: ItemService::new(users.clone(), items.clone(), bookings.clone(), comments.clone()),
            comments: CommentService::new(users.clone(), items.clone(), bookings.clone(), comments),
            bookings: BookingService::new(users, items, bookings),
            storage: storage.into(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, I, B, C>(
    app_state: web::Data<AppState<U, I, B, C>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let cors = create_cors(&config.cors);

    // Extraction failures share the error body of every other 400
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| ApiError::Malformed(err.to_string()).into());
    let query_config =
        web::QueryConfig::default().error_handler(|err, _req| ApiError::Malformed(err.to_string()).into());
    let path_config =
        web::PathConfig::default().error_handler(|err, _req| ApiError::Malformed(err.to_string()).into());

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        // Add middleware (CORS first, then logging)
        .wrap(cors)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check::<U, I, B, C>))
        .configure(routes::users::configure::<U, I, B, C>)
        .configure(routes::items::configure::<U, I, B, C>)
        .configure(routes::bookings::configure::<U, I, B, C>)
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<U, I, B, C>(state: web::Data<AppState<U, I, B, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    HttpResponse::Ok().json(HealthResponse::healthy(
        "shareit-api",
        env!("CARGO_PKG_VERSION"),
        state.storage.as_str(),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
