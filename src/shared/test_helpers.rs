//! In-memory repositories and request helpers for handler and service tests.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, Router};
use chrono::Utc;
use sqlx::error::{DatabaseError, ErrorKind};

use crate::core::error::{handle_db_error, Result};
use crate::features::assets::models::{Asset, AssetChanges, AssetWithCategory, NewAsset};
use crate::features::assets::AssetRepository;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::categories::models::Category;
use crate::features::categories::CategoryRepository;

pub fn test_user(username: &str, role_level: i32) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: format!("id-{}", username),
        username: Some(username.to_string()),
        role_level,
    }
}

/// Attach `user` to every request, standing in for the identity middleware.
pub fn with_authenticated_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[derive(Default)]
struct StoreState {
    categories: Vec<Category>,
    assets: Vec<Asset>,
    next_category_id: i64,
    next_asset_id: i64,
    write_attempts: usize,
}

impl StoreState {
    fn joined(&self, asset: &Asset) -> AssetWithCategory {
        let category = asset
            .ca_cc_id
            .and_then(|id| self.categories.iter().find(|c| c.cc_id == id));
        AssetWithCategory {
            asset: asset.clone(),
            cc_id: category.map(|c| c.cc_id),
            cc_name: category.map(|c| c.cc_name.clone()),
        }
    }

    /// Mirrors the foreign key on `ca_cc_id`: a dangling id fails the way
    /// Postgres does and goes through the same error translation.
    fn check_category(&self, category_id: Option<i64>) -> Result<()> {
        match category_id {
            Some(id) if !self.categories.iter().any(|c| c.cc_id == id) => Err(handle_db_error(
                PgStateError::foreign_key_violation().into(),
                category_id,
            )),
            _ => Ok(()),
        }
    }
}

/// Database error carrying a Postgres SQLSTATE, for exercising
/// `handle_db_error` without a server.
#[derive(Debug)]
pub struct PgStateError {
    code: &'static str,
}

impl PgStateError {
    pub fn new(code: &'static str) -> Self {
        Self { code }
    }

    pub fn foreign_key_violation() -> Self {
        Self::new("23503")
    }
}

impl std::fmt::Display for PgStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "database error with SQLSTATE {}", self.code)
    }
}

impl std::error::Error for PgStateError {}

impl DatabaseError for PgStateError {
    fn message(&self) -> &str {
        "database error"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        match self.code {
            "23503" => ErrorKind::ForeignKeyViolation,
            "23505" => ErrorKind::UniqueViolation,
            _ => ErrorKind::Other,
        }
    }
}

/// Shared in-memory backing for both repositories, so assets can reference
/// categories the way the real tables do.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store lock poisoned")
    }

    /// Insert a category and return its id (ids start at 1)
    pub fn add_category(&self, name: &str) -> i64 {
        let mut state = self.lock();
        state.next_category_id += 1;
        let id = state.next_category_id;
        state.categories.push(Category {
            cc_id: id,
            cc_name: name.to_string(),
        });
        id
    }

    pub fn asset_count(&self) -> usize {
        self.lock().assets.len()
    }

    /// Number of create/update/delete calls that reached the repository,
    /// counting ones the store rejected. Zero means the service stopped the
    /// request before any write.
    pub fn write_attempts(&self) -> usize {
        self.lock().write_attempts
    }

    pub fn asset_repository(&self) -> Arc<dyn AssetRepository> {
        Arc::new(self.clone())
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| a.cc_name.cmp(&b.cc_name));
        Ok(categories)
    }
}

#[async_trait]
impl AssetRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<AssetWithCategory>> {
        let state = self.lock();
        Ok(state.assets.iter().map(|a| state.joined(a)).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<AssetWithCategory>> {
        let state = self.lock();
        Ok(state
            .assets
            .iter()
            .find(|a| a.ca_id == id)
            .map(|a| state.joined(a)))
    }

    async fn create(&self, new_asset: NewAsset) -> Result<AssetWithCategory> {
        let mut state = self.lock();
        state.write_attempts += 1;
        state.check_category(new_asset.content.category_id)?;

        state.next_asset_id += 1;
        let content = new_asset.content;
        let asset = Asset {
            ca_id: state.next_asset_id,
            ca_title: content.title,
            ca_tagline: content.tagline,
            ca_image: content.image,
            ca_image_carousel: Some(content.image_carousel),
            ca_subtitle: content.subtitle,
            ca_link: content.link,
            ca_cc_id: content.category_id,
            created_at: Utc::now().naive_utc(),
            created_by: new_asset.created_by,
            updated_at: None,
            updated_by: None,
        };
        state.assets.push(asset.clone());
        Ok(state.joined(&asset))
    }

    async fn update(&self, id: i64, changes: AssetChanges) -> Result<Option<AssetWithCategory>> {
        let mut state = self.lock();
        state.write_attempts += 1;
        state.check_category(changes.content.category_id)?;

        let Some(index) = state.assets.iter().position(|a| a.ca_id == id) else {
            return Ok(None);
        };
        let next = state.assets[index].clone().with_changes(changes);
        state.assets[index] = next.clone();
        Ok(Some(state.joined(&next)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.lock();
        state.write_attempts += 1;
        let before = state.assets.len();
        state.assets.retain(|a| a.ca_id != id);
        Ok(state.assets.len() != before)
    }
}
