//! Category Service

use std::sync::Arc;
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list_all().await
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;

    #[tokio::test]
    async fn test_list_categories_returns_repository_rows() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![Category {
                name: Some("Phones".to_string()),
                ..Default::default()
            }])
        });

        let service = CategoryService::new(mock_repo);
        let categories = service.list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name.as_deref(), Some("Phones"));
    }

    #[tokio::test]
    async fn test_list_categories_empty() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list_all().returning(|| Ok(vec![]));

        let service = CategoryService::new(mock_repo);
        assert!(service.list_categories().await.unwrap().is_empty());
    }
}
