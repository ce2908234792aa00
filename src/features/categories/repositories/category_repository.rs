use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Column list for `compro.compro_category`
const COLUMNS: &str = "cc_id, cc_name";

/// Read access to categories; they are managed outside this service.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by name ascending
    async fn list_all(&self) -> Result<Vec<Category>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM compro.compro_category ORDER BY cc_name");

        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }
}
