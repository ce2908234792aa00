use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all categories, keeping the repository's name ordering
    pub async fn get_all_categories(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    #[tokio::test]
    async fn test_categories_sorted_by_name_regardless_of_insertion_order() {
        let store = InMemoryStore::new();
        store.add_category("Products");
        store.add_category("Events");
        store.add_category("Awards");
        let service = CategoryService::new(store.category_repository());

        let names: Vec<String> = service
            .get_all_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.cc_name)
            .collect();

        assert_eq!(names, vec!["Awards", "Events", "Products"]);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let store = InMemoryStore::new();
        let service = CategoryService::new(store.category_repository());
        assert!(service.get_all_categories().await.unwrap().is_empty());
    }
}
