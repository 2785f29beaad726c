//! Item catalog and comment endpoints under `/items`

use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;
use validator::Validate;

use si_core::domain::entities::Id;
use si_core::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{CommentDto, CreateCommentRequest, CreateItemRequest, ItemDto, ItemInfoDto, UpdateItemRequest};
use crate::handlers::ApiResult;
use crate::middleware::CallerId;

/// `?text=` query of the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
}

pub fn configure<U, I, B, C>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    // Literal segments go before `/items/{id}` so they are not read as ids
    cfg.service(web::resource("/items/search").route(web::get().to(search_items::<U, I, B, C>)))
        .service(web::resource("/items/comment").route(web::get().to(list_owner_comments::<U, I, B, C>)))
        .service(
            web::resource("/items")
                .route(web::post().to(create_item::<U, I, B, C>))
                .route(web::get().to(list_owner_items::<U, I, B, C>)),
        )
        .service(
            web::resource("/items/{id}")
                .route(web::get().to(get_item::<U, I, B, C>))
                .route(web::patch().to(update_item::<U, I, B, C>)),
        )
        .service(
            web::resource("/items/{id}/comment")
                .route(web::post().to(add_comment::<U, I, B, C>))
                .route(web::get().to(list_item_comments::<U, I, B, C>)),
        );
}

/// Handler for POST /items
///
/// The caller becomes the owner.
///
/// ## Errors
/// - 400: Blank name or description, missing `available`
/// - 404: Caller is not a registered user
pub async fn create_item<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    request: web::Json<CreateItemRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    request.validate()?;
    let item = request.into_inner().into_item(caller.id());

    let item = state.items.create_item(item).await?;
    info!("User {} listed item {}", caller.id(), item.id);

    Ok(HttpResponse::Created().json(ItemDto::from(item)))
}

/// Handler for PATCH /items/{id}
///
/// ## Errors
/// - 403: Caller is not the owner
/// - 404: Item or caller does not exist
pub async fn update_item<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    path: web::Path<Id>,
    request: web::Json<UpdateItemRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let item_id = path.into_inner();
    let item = state
        .items
        .update_item(item_id, request.into_inner().into(), caller.id())
        .await?;
    info!("User {} updated item {}", caller.id(), item_id);

    Ok(HttpResponse::Ok().json(ItemDto::from(item)))
}

/// Handler for GET /items/{id}
pub async fn get_item<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    path: web::Path<Id>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let item_id = path.into_inner();
    let details = state.items.get_item(item_id).await?;
    info!("Fetched item {}", item_id);

    Ok(HttpResponse::Ok().json(ItemInfoDto::from(details)))
}

/// Handler for GET /items
///
/// Items of the caller with their booking slots and comments.
pub async fn list_owner_items<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let items: Vec<ItemInfoDto> = state
        .items
        .list_by_owner(caller.id())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Listed {} items of user {}", items.len(), caller.id());

    Ok(HttpResponse::Ok().json(items))
}

/// Handler for GET /items/search?text=
///
/// Available items only; blank text yields an empty list.
pub async fn search_items<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let items: Vec<ItemDto> = state
        .items
        .search(&query.text)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Search for {:?} matched {} items", query.text, items.len());

    Ok(HttpResponse::Ok().json(items))
}

/// Handler for POST /items/{id}/comment
///
/// ## Errors
/// - 400: Blank text, or the caller has no finished booking of the item
/// - 404: Item or caller does not exist
pub async fn add_comment<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
    path: web::Path<Id>,
    request: web::Json<CreateCommentRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    request.validate()?;
    let item_id = path.into_inner();

    let comment = state.comments.add_comment(item_id, caller.id(), &request.text).await?;
    info!("User {} commented on item {}", caller.id(), item_id);

    Ok(HttpResponse::Created().json(CommentDto::from(comment)))
}

/// Handler for GET /items/{id}/comment
pub async fn list_item_comments<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    path: web::Path<Id>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let item_id = path.into_inner();
    let comments: Vec<CommentDto> = state
        .comments
        .list_by_item(item_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Listed {} comments of item {}", comments.len(), item_id);

    Ok(HttpResponse::Ok().json(comments))
}

/// Handler for GET /items/comment
///
/// Comments left on any item the caller owns.
pub async fn list_owner_comments<U, I, B, C>(
    state: web::Data<AppState<U, I, B, C>>,
    caller: CallerId,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
{
    let comments: Vec<CommentDto> = state
        .comments
        .list_by_owner(caller.id())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    info!("Listed {} comments on items of user {}", comments.len(), caller.id());

    Ok(HttpResponse::Ok().json(comments))
}
