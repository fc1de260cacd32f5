use sea_orm::EntityTrait;

use crate::{
    dto::categories::CategoryList,
    entity::{Categories, categories::Model as CategoryModel},
    error::AppResult,
    models::Category,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = Categories::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    let total = items.len() as i64;
    let data = CategoryList { items };
    Ok(ApiResponse::success(
        "Categories",
        data,
        Some(Meta::total(total)),
    ))
}

pub(crate) fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
    }
}
