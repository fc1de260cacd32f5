use chrono::Utc;
use sea_orm::EntityTrait;

use crate::{
    dto::products::ProductList,
    entity::{
        Categories, Products, categories::Model as CategoryModel, products::Model as ProductModel,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    services::category_service::category_from_entity,
    state::AppState,
};

/// All products with their category eager-loaded. No pagination.
pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = Products::find()
        .find_also_related(Categories)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(product, category)| product_from_entity(product, category))
        .collect();

    let total = items.len() as i64;
    let data = ProductList { items };
    Ok(ApiResponse::success(
        "Products",
        data,
        Some(Meta::total(total)),
    ))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let result = Products::find_by_id(id)
        .find_also_related(Categories)
        .one(&state.orm)
        .await?;

    let product = match result {
        Some((product, category)) => product_from_entity(product, category),
        None => {
            tracing::warn!(product_id = id, "product not found");
            return Err(AppError::NotFound);
        }
    };

    Ok(ApiResponse::success("Product", product, None))
}

pub(crate) fn product_from_entity(
    model: ProductModel,
    category: Option<CategoryModel>,
) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        category: category.map(category_from_entity),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
