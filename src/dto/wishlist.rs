use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Wishlist responses carry the product set, never the wishlist row itself.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct WishlistProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
