use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

use crate::{
    audit::log_audit,
    dto::wishlist::WishlistProductList,
    entity::{
        Products, WishlistItems, Wishlists,
        wishlist_items::ActiveModel as WishlistItemActive,
        wishlists::{ActiveModel as WishlistActive, Column as WishlistColumn, Model as WishlistModel},
    },
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::product_service::product_from_entity,
    state::AppState,
};

/// Adds a product to the user's wishlist, creating the wishlist on first
/// use. Re-adding a member is a no-op.
pub async fn add_to_wishlist(
    state: &AppState,
    user_id: i32,
    product_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let product = Products::find_by_id(product_id).one(&state.orm).await?;
    if product.is_none() {
        tracing::warn!(product_id, "product not found");
        return Err(AppError::NotFound);
    }

    let wishlist = match find_wishlist(state, user_id).await? {
        Some(wishlist) => wishlist,
        None => {
            WishlistActive {
                id: NotSet,
                user_id: Set(user_id),
                created_at: NotSet,
            }
            .insert(&state.orm)
            .await?
        }
    };

    let existing = WishlistItems::find_by_id((wishlist.id, product_id))
        .one(&state.orm)
        .await?;

    if existing.is_some() {
        tracing::warn!(user_id, product_id, "product already in wishlist");
    } else {
        WishlistItemActive {
            wishlist_id: Set(wishlist.id),
            product_id: Set(product_id),
            created_at: NotSet,
        }
        .insert(&state.orm)
        .await?;
        tracing::info!(user_id, product_id, "product added to wishlist");
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user_id),
        "wishlist_add",
        Some("wishlists"),
        Some(serde_json::json!({ "product_id": product_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Added to wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn get_wishlist(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<WishlistProductList>> {
    let wishlist = match find_wishlist(state, user_id).await? {
        Some(wishlist) => wishlist,
        None => {
            tracing::warn!(user_id, "wishlist not found");
            return Err(AppError::NotFound);
        }
    };

    let items = wishlist
        .find_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|product| product_from_entity(product, None))
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    let data = WishlistProductList { items };
    Ok(ApiResponse::success(
        "Wishlist",
        data,
        Some(Meta::total(total)),
    ))
}

/// Removes a membership row; the wishlist row itself is kept even when it
/// becomes empty.
pub async fn remove_from_wishlist(
    state: &AppState,
    user_id: i32,
    product_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let wishlist = match find_wishlist(state, user_id).await? {
        Some(wishlist) => wishlist,
        None => {
            tracing::warn!(user_id, "wishlist not found");
            return Err(AppError::NotFound);
        }
    };

    let result = WishlistItems::delete_by_id((wishlist.id, product_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        tracing::warn!(user_id, product_id, "product not in wishlist");
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id, product_id, "product removed from wishlist");

    if let Err(err) = log_audit(
        &state.pool,
        Some(user_id),
        "wishlist_remove",
        Some("wishlists"),
        Some(serde_json::json!({ "product_id": product_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Removed from wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_wishlist(state: &AppState, user_id: i32) -> AppResult<Option<WishlistModel>> {
    let wishlist = Wishlists::find()
        .filter(WishlistColumn::UserId.eq(user_id))
        .one(&state.orm)
        .await?;
    Ok(wishlist)
}
