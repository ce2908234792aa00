use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::assets::models::{Asset, AssetChanges, AssetWithCategory, NewAsset};

/// Column list for `compro.compro_assets`
const COLUMNS: &str = "ca_id, ca_title, ca_tagline, ca_image, ca_image_carousel, ca_subtitle, \
    ca_link, ca_cc_id, created_at, created_by, updated_at, updated_by";

/// Asset columns plus the joined category, aliased `a` / `c`
const SELECT_WITH_CATEGORY: &str = "SELECT a.ca_id, a.ca_title, a.ca_tagline, a.ca_image, \
    a.ca_image_carousel, a.ca_subtitle, a.ca_link, a.ca_cc_id, a.created_at, a.created_by, \
    a.updated_at, a.updated_by, c.cc_id, c.cc_name \
    FROM compro.compro_assets a \
    LEFT JOIN compro.compro_category c ON c.cc_id = a.ca_cc_id";

/// Data access for assets.
///
/// Mutations run in their own transaction and commit before returning. A
/// dangling category reference is reported as `AppError::InvalidReference`,
/// any other failure as `AppError::Database`.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<AssetWithCategory>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<AssetWithCategory>>;

    async fn create(&self, new_asset: NewAsset) -> Result<AssetWithCategory>;

    /// `None` when no row has this id
    async fn update(&self, id: i64, changes: AssetChanges) -> Result<Option<AssetWithCategory>>;

    /// `false` when no row has this id
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgAssetRepository {
    pool: PgPool,
}

impl PgAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_joined(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> std::result::Result<AssetWithCategory, sqlx::Error> {
        let query = format!("{SELECT_WITH_CATEGORY} WHERE a.ca_id = $1");
        sqlx::query_as::<_, AssetWithCategory>(&query)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        new_asset: &NewAsset,
    ) -> std::result::Result<AssetWithCategory, sqlx::Error> {
        let content = &new_asset.content;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO compro.compro_assets \
                (ca_title, ca_tagline, ca_image, ca_image_carousel, ca_subtitle, ca_link, \
                 ca_cc_id, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING ca_id",
        )
        .bind(&content.title)
        .bind(&content.tagline)
        .bind(&content.image)
        .bind(&content.image_carousel)
        .bind(&content.subtitle)
        .bind(&content.link)
        .bind(content.category_id)
        .bind(&new_asset.created_by)
        .fetch_one(&mut **tx)
        .await?;

        Self::fetch_joined(tx, id).await
    }

    /// Read-modify-write: lock the current row, merge, then save the new record.
    async fn load_and_save(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
        changes: AssetChanges,
    ) -> std::result::Result<Option<AssetWithCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM compro.compro_assets WHERE ca_id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let next = current.with_changes(changes);
        Self::save(tx, &next).await?;

        Self::fetch_joined(tx, id).await.map(Some)
    }

    async fn save(
        tx: &mut Transaction<'_, Postgres>,
        asset: &Asset,
    ) -> std::result::Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE compro.compro_assets SET \
                ca_title = $2, ca_tagline = $3, ca_image = $4, ca_image_carousel = $5, \
                ca_subtitle = $6, ca_link = $7, ca_cc_id = $8, \
                updated_at = $9, updated_by = $10 \
             WHERE ca_id = $1",
        )
        .bind(asset.ca_id)
        .bind(&asset.ca_title)
        .bind(&asset.ca_tagline)
        .bind(&asset.ca_image)
        .bind(&asset.ca_image_carousel)
        .bind(&asset.ca_subtitle)
        .bind(&asset.ca_link)
        .bind(asset.ca_cc_id)
        .bind(asset.updated_at)
        .bind(&asset.updated_by)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Commit on success; otherwise roll back before surfacing the error.
    async fn finish<T>(
        tx: Transaction<'_, Postgres>,
        result: std::result::Result<T, sqlx::Error>,
        category_id: Option<i64>,
    ) -> Result<T> {
        match result {
            Ok(value) => {
                tx.commit().await.map_err(|e| handle_db_error(e, category_id))?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Failed to roll back asset transaction: {:?}", rollback_err);
                }
                Err(handle_db_error(e, category_id))
            }
        }
    }
}

#[async_trait]
impl AssetRepository for PgAssetRepository {
    async fn list_all(&self) -> Result<Vec<AssetWithCategory>> {
        let query = format!("{SELECT_WITH_CATEGORY} ORDER BY a.ca_id");
        sqlx::query_as::<_, AssetWithCategory>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list assets: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<AssetWithCategory>> {
        let query = format!("{SELECT_WITH_CATEGORY} WHERE a.ca_id = $1");
        sqlx::query_as::<_, AssetWithCategory>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get asset {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn create(&self, new_asset: NewAsset) -> Result<AssetWithCategory> {
        let category_id = new_asset.content.category_id;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let result = Self::insert(&mut tx, &new_asset).await;
        Self::finish(tx, result, category_id).await
    }

    async fn update(&self, id: i64, changes: AssetChanges) -> Result<Option<AssetWithCategory>> {
        let category_id = changes.content.category_id;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let result = Self::load_and_save(&mut tx, id, changes).await;
        Self::finish(tx, result, category_id).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let result = sqlx::query_scalar::<_, i64>(
            "DELETE FROM compro.compro_assets WHERE ca_id = $1 RETURNING ca_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map(|deleted| deleted.is_some());
        Self::finish(tx, result, None).await
    }
}
