use axum::{
    Router,
    http::StatusCode,
    routing::{patch, post},
};

use crate::{
    dto::cart::{AddToCartRequest, CartItemChange, CartItemPath, UpdateCartItemRequest},
    error::AppResult,
    middleware::validate::{ValidatedJson, ValidatedPath},
    response::{ApiResponse, Envelope, Meta, success},
};

pub fn router() -> Router {
    Router::new()
        .route("/items", post(add_cart_item))
        .route("/items/{itemId}", patch(update_cart_item))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Cart item accepted", body = ApiResponse<CartItemChange, Meta>),
        (status = 400, description = "Validation failed", body = ApiResponse<serde_json::Value, Meta>),
    ),
    tag = "Cart"
)]
pub async fn add_cart_item(
    ValidatedJson(payload): ValidatedJson<AddToCartRequest>,
) -> AppResult<Envelope<CartItemChange, Meta>> {
    tracing::info!(
        product_variant_id = payload.product_variant_id,
        quantity = payload.quantity,
        "cart item added"
    );
    let change = CartItemChange::from(payload);
    Ok(success(Some(change), Some("Item added to cart"), None).with_status(StatusCode::CREATED))
}

#[utoipa::path(
    patch,
    path = "/api/cart/items/{itemId}",
    params(CartItemPath),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Cart item quantity updated", body = ApiResponse<CartItemChange, Meta>),
        (status = 400, description = "Validation failed", body = ApiResponse<serde_json::Value, Meta>),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    ValidatedPath(path): ValidatedPath<CartItemPath>,
    ValidatedJson(payload): ValidatedJson<UpdateCartItemRequest>,
) -> AppResult<Envelope<CartItemChange, Meta>> {
    tracing::info!(
        item_id = path.item_id,
        quantity = payload.quantity,
        "cart item quantity updated"
    );
    let change = CartItemChange::updated(path.item_id, payload);
    Ok(success(Some(change), Some("Cart item updated"), None))
}
