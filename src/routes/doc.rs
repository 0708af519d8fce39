use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::cart::{AddToCartRequest, CartItemChange, UpdateCartItemRequest},
    reply::{ErrorBody, ReplyBody},
    response::{ApiResponse, FieldError, Meta},
    routes::{cart, health},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cart::add_cart_item,
        cart::update_cart_item,
    ),
    components(
        schemas(
            AddToCartRequest,
            UpdateCartItemRequest,
            CartItemChange,
            FieldError,
            ErrorBody,
            Meta,
            health::HealthData,
            ApiResponse<CartItemChange, Meta>,
            ReplyBody<health::HealthData, Meta>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cart", description = "Cart item validation endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
