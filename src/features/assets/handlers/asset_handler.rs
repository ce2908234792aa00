use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::assets::dtos::{AssetDetailDto, AssetPayloadDto, AssetSummaryDto};
use crate::features::assets::services::AssetService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// List all assets
///
/// Public endpoint returning the list view of every asset with its category.
#[utoipa::path(
    get,
    path = "/assets/",
    responses(
        (status = 200, description = "List of assets", body = ApiResponse<Vec<AssetSummaryDto>>),
    ),
    tag = "assets"
)]
pub async fn list_assets(
    State(service): State<Arc<AssetService>>,
) -> Result<Json<ApiResponse<Vec<AssetSummaryDto>>>> {
    let assets = service.get_all_assets().await?;
    Ok(Json(ApiResponse::success(
        Some(assets),
        "Assets retrieved successfully",
    )))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset found", body = ApiResponse<AssetDetailDto>),
        (status = 404, description = "Asset not found")
    ),
    tag = "assets"
)]
pub async fn get_asset(
    State(service): State<Arc<AssetService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<AssetDetailDto>>> {
    let asset = service.get_asset_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        Some(asset),
        "Asset retrieved successfully",
    )))
}

/// Create a new asset (role level gated)
#[utoipa::path(
    post,
    path = "/assets/",
    request_body = AssetPayloadDto,
    responses(
        (status = 201, description = "Asset created", body = ApiResponse<AssetDetailDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 403, description = "Insufficient role level")
    ),
    tag = "assets",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_asset(
    State(service): State<Arc<AssetService>>,
    user: AuthenticatedUser,
    AppJson(dto): AppJson<AssetPayloadDto>,
) -> Result<(StatusCode, Json<ApiResponse<AssetDetailDto>>)> {
    let content = dto.into_content()?;

    let asset = service.create_asset(content, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(asset), "Asset created successfully")),
    ))
}

/// Replace an asset's content (role level gated)
#[utoipa::path(
    put,
    path = "/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    request_body = AssetPayloadDto,
    responses(
        (status = 200, description = "Asset updated", body = ApiResponse<AssetDetailDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 403, description = "Insufficient role level"),
        (status = 404, description = "Asset not found")
    ),
    tag = "assets",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_asset(
    State(service): State<Arc<AssetService>>,
    user: AuthenticatedUser,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<AssetPayloadDto>,
) -> Result<Json<ApiResponse<AssetDetailDto>>> {
    let content = dto.into_content()?;

    let asset = service.update_asset(id, content, &user).await?;
    Ok(Json(ApiResponse::success(
        Some(asset),
        "Asset updated successfully",
    )))
}

/// Delete an asset (role level gated)
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    params(
        ("id" = i64, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset deleted"),
        (status = 403, description = "Insufficient role level"),
        (status = 404, description = "Asset not found")
    ),
    tag = "assets",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_asset(
    State(service): State<Arc<AssetService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_asset(id).await?;
    Ok(Json(ApiResponse::success(None, "Asset deleted successfully")))
}
