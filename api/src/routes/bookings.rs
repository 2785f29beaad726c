//! Booking workflow endpoints under `/bookings`

use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;

use si_core::domain::entities::Id;
use si_core::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{BookingDto, CreateBookingRequest};
use crate::handlers::ApiResult;
use crate::middleware::CallerId;

use super::StateQuery;

/// `?approved=` query of the decision endpoint
#[derive(Debug, Deserialize)]
pub struct DecisionQuery {
    pub approved: bool,
}

pub fn configure<U, I, B, C>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    // `/bookings/owner` must precede `/bookings/{id}`
    cfg.service(web::resource("/bookings/owner").route(web::get().to(list_owner_bookings::<U, I, B, C>)))
        .service(
            web::resource("/bookings")
                .route(web::post().to(create_booking::<U, I, B, C>))
                .route(web::get().to(list_booker_bookings::<U, I, B, C>)),
        )
        .service(
            web::resource("/bookings/{id}")
                .route(web::get().to(get_booking::<U, I, B, C>))
                .route(web::patch().to(decide_booking::<U, I, B, C>)),
        );
}

/// Handler for POST /bookings
///
/// # Request Body
///
/// ```json
/// {
///     "itemId": 1,
///     "start": "2030-01-01T10:00:00Z",
///     "end": "2030-01-02T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400: Own item, unavailable item, `start >= end`, missing field
/// - 404: Item or caller does not exist
pub async fn create_booking<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    request: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let request = request.into_inner();
    let details = state
        .bookings
        .create_booking(caller.id(), request.item_id, request.start, request.end)
        .await?;
    info!(
        "User {} requested booking {} of item {}",
        caller.id(),
        details.booking.id,
        request.item_id
    );

    Ok(HttpResponse::Created().json(BookingDto::from(details)))
}

/// Handler for PATCH /bookings/{id}?approved=bool
///
/// ## Errors
/// - 400: Booking already decided
/// - 403: Caller does not own the item
/// - 404: No such booking
pub async fn decide_booking<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    path: web::Path<Id>,
    query: web::Query<DecisionQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let booking_id = path.into_inner();
    let details = state
        .bookings
        .update_status(booking_id, query.approved, caller.id())
        .await?;
    info!("User {} set booking {} to {}", caller.id(), booking_id, details.booking.status);

    Ok(HttpResponse::Ok().json(BookingDto::from(details)))
}

/// Handler for GET /bookings/{id}
///
/// Visible to the booker and the item owner only.
pub async fn get_booking<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    path: web::Path<Id>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let booking_id = path.into_inner();
    let details = state.bookings.get_booking(booking_id, caller.id()).await?;
    info!("User {} fetched booking {}", caller.id(), booking_id);

    Ok(HttpResponse::Ok().json(BookingDto::from(details)))
}

/// Handler for GET /bookings?state=
///
/// Bookings made by the caller, newest start first.
pub async fn list_booker_bookings<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    query: web::Query<StateQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let filter = query.booking_state()?;
    let bookings: Vec<BookingDto> = state
        .bookings
        .list_by_booker(caller.id(), filter)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Listed {} {} bookings of booker {}", bookings.len(), filter, caller.id());

    Ok(HttpResponse::Ok().json(bookings))
}

/// Handler for GET /bookings/owner?state=
///
/// Bookings of the caller's items, newest start first.
pub async fn list_owner_bookings<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    query: web::Query<StateQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let filter = query.booking_state()?;
    let bookings: Vec<BookingDto> = state
        .bookings
        .list_by_owner(caller.id(), filter)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Listed {} {} bookings for owner {}", bookings.len(), filter, caller.id());

    Ok(HttpResponse::Ok().json(bookings))
}
