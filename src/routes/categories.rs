use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::categories::CategoryList,
    error::AppResult,
    response::ApiResponse,
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let response = category_service::list_categories(&state).await?;
    Ok(Json(response))
}
