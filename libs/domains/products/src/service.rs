//! Product Service - Business logic layer

use database::mongodb::{DeleteAck, InsertAck, UpdateAck};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductListQuery, ProductPage, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing catalog operations
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of products plus the totals for the same filter
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductListQuery) -> ProductResult<ProductPage> {
        let filter = query.filter();
        let pagination = query.pagination();
        tracing::debug!(brand = ?filter.brand, page = pagination.page, size = pagination.size, "Listing products");

        let total_products = self.repository.count(filter.clone()).await?;
        let result = self.repository.list(filter, pagination).await?;

        Ok(ProductPage {
            result,
            total_products,
            total_pages: pagination.total_pages(total_products),
        })
    }

    /// Get a product by ID; `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: Product) -> ProductResult<InsertAck> {
        self.repository.create(product).await
    }

    /// Overwrite the tracked fields of a product
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: ObjectId,
        input: UpdateProduct,
    ) -> ProductResult<UpdateAck> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<DeleteAck> {
        self.repository.delete(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, ProductFilter};
    use crate::repository::MockProductRepository;
    use mockall::predicate;
    use serde_json::json;

    fn product(name: &str, brand: &str) -> Product {
        Product {
            id: Some(ObjectId::new().to_hex()),
            name: Some(json!(name)),
            brand: Some(json!(brand)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_products_uses_defaults_and_counts_pages() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_count()
            .with(predicate::eq(ProductFilter::default()))
            .returning(|_| Ok(23));
        mock_repo
            .expect_list()
            .with(
                predicate::eq(ProductFilter::default()),
                predicate::eq(Pagination { page: 0, size: 10 }),
            )
            .returning(|_, _| Ok(vec![product("Phone", "Acme")]));

        let service = ProductService::new(mock_repo);
        let page = service
            .list_products(ProductListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.total_products, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.result.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_passes_brand_and_page() {
        let mut mock_repo = MockProductRepository::new();
        let expected_filter = ProductFilter {
            brand: Some("acme".to_string()),
        };

        mock_repo
            .expect_count()
            .with(predicate::eq(expected_filter.clone()))
            .returning(|_| Ok(5));
        mock_repo
            .expect_list()
            .with(
                predicate::eq(expected_filter),
                predicate::eq(Pagination { page: 1, size: 2 }),
            )
            .returning(|_, _| Ok(vec![product("Tablet", "ACME")]));

        let service = ProductService::new(mock_repo);
        let page = service
            .list_products(ProductListQuery {
                page: Some("1".to_string()),
                size: Some("2".to_string()),
                brand: Some("acme".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.result[0].brand_text(), Some("ACME"));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_none() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        assert!(service.get_product(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_forwards_full_overwrite() {
        let mut mock_repo = MockProductRepository::new();
        let id = ObjectId::new();
        let input = UpdateProduct {
            name: Some(json!("Phone 2")),
            ..Default::default()
        };

        mock_repo
            .expect_update()
            .with(predicate::eq(id), predicate::eq(input.clone()))
            .returning(|_, _| {
                Ok(UpdateAck {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: 1,
                    upserted_count: 0,
                    upserted_id: None,
                })
            });

        let service = ProductService::new(mock_repo);
        let ack = service.update_product(id, input).await.unwrap();
        assert_eq!(ack.modified_count, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_product_reports_zero() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_delete().returning(|_| {
            Ok(DeleteAck {
                acknowledged: true,
                deleted_count: 0,
            })
        });

        let service = ProductService::new(mock_repo);
        let ack = service.delete_product(ObjectId::new()).await.unwrap();
        assert_eq!(ack.deleted_count, 0);
    }
}
