//! User directory endpoints under `/users`

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use si_core::domain::entities::Id;
use si_core::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::handlers::ApiResult;

pub fn configure<U, I, B, C>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    cfg.service(
        web::resource("/users")
            .route(web::post().to(create_user::<U, I, B, C>))
            .route(web::get().to(list_users::<U, I, B, C>)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::get().to(get_user::<U, I, B, C>))
            .route(web::patch().to(update_user::<U, I, B, C>))
            .route(web::delete().to(delete_user::<U, I, B, C>)),
    );
}

/// Handler for POST /users
///
/// A missing or blank `name` defaults to the email.
///
/// ## Errors
/// - 400: Missing or malformed email
/// - 409: Email already registered
pub async fn create_user<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    request.validate()?;
    let request = request.into_inner();
    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();

    let user = state.users.create_user(&name, &email).await?;
    info!("Created user {}", user.id);

    Ok(HttpResponse::Created().json(UserDto::from(user)))
}

/// Handler for GET /users
pub async fn list_users<U, I, B, C>(state: web::Data<AppState<U, I, B, C>>) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let users: Vec<UserDto> = state.users.list_users().await?.into_iter().map(Into::into).collect();
    info!("Listed {} users", users.len());

    Ok(HttpResponse::Ok().json(users))
}

/// Handler for GET /users/{id}
pub async fn get_user<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    path: web::Path<Id>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let user_id = path.into_inner();
    let user = state.users.get_user(user_id).await?;
    info!("Fetched user {}", user_id);

    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// Handler for PATCH /users/{id}
///
/// Only the fields present in the body change.
pub async fn update_user<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    path: web::Path<Id>,
    request: web::Json<UpdateUserRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    request.validate()?;
    let user_id = path.into_inner();

    let user = state.users.update_user(user_id, request.into_inner().into()).await?;
    info!("Updated user {}", user_id);

    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// Handler for DELETE /users/{id}
///
/// Also removes the user's items, their bookings and comments.
pub async fn delete_user<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    path: web::Path<Id>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let user_id = path.into_inner();
    state.users.delete_user(user_id).await?;
    info!("Deleted user {}", user_id);

    Ok(HttpResponse::NoContent().finish())
}
