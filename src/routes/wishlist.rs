use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::wishlist::WishlistProductList,
    error::AppResult,
    response::ApiResponse,
    services::wishlist_service,
    state::AppState,
};

// Mounted under /products, matching the public paths.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlist/{user_id}",
            get(get_wishlist).post(add_to_wishlist),
        )
        .route("/wishlist/{user_id}/{product_id}", delete(remove_from_wishlist))
}

#[utoipa::path(
    post,
    path = "/api/products/wishlist/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body(content = i32, description = "Product id to add"),
    responses(
        (status = 200, description = "Added to wishlist (idempotent)", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(product_id): Json<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let response = wishlist_service::add_to_wishlist(&state, user_id, product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/products/wishlist/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Wishlist products", body = ApiResponse<WishlistProductList>),
        (status = 404, description = "Wishlist not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Wishlist"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<WishlistProductList>>> {
    let response = wishlist_service::get_wishlist(&state, user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/products/wishlist/{user_id}/{product_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed from wishlist", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Wishlist or membership not found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(i32, i32)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let response = wishlist_service::remove_from_wishlist(&state, user_id, product_id).await?;
    Ok(Json(response))
}
