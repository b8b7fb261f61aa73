use async_trait::async_trait;
use database::mongodb::{DeleteAck, InsertAck, UpdateAck};
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{Pagination, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Every method maps to exactly one store call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product as sent by the client
    async fn create(&self, product: Product) -> ProductResult<InsertAck>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// One page of products matching the filter, ordered by ID
    async fn list(&self, filter: ProductFilter, pagination: Pagination)
    -> ProductResult<Vec<Product>>;

    /// Count products matching the filter
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;

    /// Overwrite the nine tracked fields of a product
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<UpdateAck>;

    /// Delete a product by ID
    async fn delete(&self, id: ObjectId) -> ProductResult<DeleteAck>;
}
