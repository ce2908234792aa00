use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::assets::{dtos as assets_dtos, handlers as assets_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Assets
        assets_handlers::list_assets,
        assets_handlers::get_asset,
        assets_handlers::create_asset,
        assets_handlers::update_asset,
        assets_handlers::delete_asset,
        // Categories (public)
        categories_handlers::list_categories,
    ),
    components(
        schemas(
            // Assets
            assets_dtos::AssetPayloadDto,
            assets_dtos::AssetSummaryDto,
            assets_dtos::AssetDetailDto,
            ApiResponse<Vec<assets_dtos::AssetSummaryDto>>,
            ApiResponse<assets_dtos::AssetDetailDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
        )
    ),
    tags(
        (name = "assets", description = "Company profile assets (writes require role level)"),
        (name = "categories", description = "Asset categories (public, read-only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Compro API",
        version = "0.1.0",
        description = "Company profile assets and categories",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
