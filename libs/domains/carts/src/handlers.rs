//! HTTP handlers for Carts API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use database::mongodb::InsertAck;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CartResult;
use crate::models::{CartItem, CartQuery};
use crate::repository::CartRepository;
use crate::service::CartService;

/// OpenAPI documentation for Carts API
#[derive(OpenApi)]
#[openapi(
    paths(list_cart, add_item),
    components(
        schemas(CartItem, InsertAck),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Carts", description = "Shopping cart items")
    )
)]
pub struct ApiDoc;

/// Create the carts router
pub fn router<R: CartRepository + 'static>(service: CartService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_cart).post(add_item))
        .with_state(shared_service)
}

/// List the cart items of one owner
#[utoipa::path(
    get,
    path = "",
    tag = "Carts",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart items for the email", body = Vec<CartItem>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    Query(query): Query<CartQuery>,
) -> CartResult<Json<Vec<CartItem>>> {
    let items = service.list_cart(query).await?;
    Ok(Json(items))
}

/// Add an item to a cart
#[utoipa::path(
    post,
    path = "",
    tag = "Carts",
    request_body = CartItem,
    responses(
        (status = 200, description = "Item inserted", body = InsertAck),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_item<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    JsonBody(item): JsonBody<CartItem>,
) -> CartResult<Json<InsertAck>> {
    let ack = service.add_item(item).await?;
    Ok(Json(ack))
}
