use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{categories::CategoryList, products::ProductList, wishlist::WishlistProductList},
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::{categories, health, products, wishlist},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        products::list_products,
        products::get_product,
        wishlist::add_to_wishlist,
        wishlist::get_wishlist,
        wishlist::remove_from_wishlist
    ),
    components(
        schemas(
            Category,
            Product,
            CategoryList,
            ProductList,
            WishlistProductList,
            Meta,
            ApiResponse<Category>,
            ApiResponse<Product>,
            ApiResponse<CategoryList>,
            ApiResponse<ProductList>,
            ApiResponse<WishlistProductList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Wishlist", description = "Per-user wishlist endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
