use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List all categories
///
/// Public endpoint. Categories are ordered by name.
#[utoipa::path(
    get,
    path = "/categories/",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.get_all_categories().await?;
    Ok(Json(ApiResponse::success(
        Some(categories),
        "Categories retrieved successfully",
    )))
}
