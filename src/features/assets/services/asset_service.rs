use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::assets::dtos::{AssetDetailDto, AssetSummaryDto};
use crate::features::assets::models::{AssetChanges, AssetContent, NewAsset};
use crate::features::assets::repositories::AssetRepository;
use crate::features::auth::model::AuthenticatedUser;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Asset with ID {} not found", id))
}

/// Business rules for assets: existence checks and audit stamping
pub struct AssetService {
    repository: Arc<dyn AssetRepository>,
}

impl AssetService {
    pub fn new(repository: Arc<dyn AssetRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_assets(&self) -> Result<Vec<AssetSummaryDto>> {
        let assets = self.repository.list_all().await?;
        Ok(assets.into_iter().map(Into::into).collect())
    }

    pub async fn get_asset_by_id(&self, id: i64) -> Result<AssetDetailDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Create an asset stamped with the caller as `created_by`.
    /// `created_at` comes from the column default; `updated_*` stay null.
    pub async fn create_asset(
        &self,
        content: AssetContent,
        actor: &AuthenticatedUser,
    ) -> Result<AssetDetailDto> {
        let created = self
            .repository
            .create(NewAsset {
                content,
                created_by: actor.actor().to_string(),
            })
            .await?;

        tracing::info!(
            "Asset created: id={}, by={}",
            created.asset.ca_id,
            created.asset.created_by
        );

        Ok(created.into())
    }

    /// Replace the content of an existing asset and stamp `updated_*`.
    pub async fn update_asset(
        &self,
        id: i64,
        content: AssetContent,
        actor: &AuthenticatedUser,
    ) -> Result<AssetDetailDto> {
        self.ensure_exists(id).await?;

        let changes = AssetChanges {
            content,
            updated_at: Utc::now().naive_utc(),
            updated_by: actor.actor().to_string(),
        };

        // The row can vanish between the check and the locked read.
        let updated = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Asset updated: id={}, by={}", id, actor.actor());

        Ok(updated.into())
    }

    pub async fn delete_asset(&self, id: i64) -> Result<()> {
        self.ensure_exists(id).await?;

        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Asset deleted: id={}", id);
        Ok(())
    }

    async fn ensure_exists(&self, id: i64) -> Result<()> {
        match self.repository.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}
