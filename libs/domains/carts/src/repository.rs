use async_trait::async_trait;
use database::mongodb::InsertAck;

use crate::error::CartResult;
use crate::models::CartItem;

/// Repository trait for CartItem persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Cart items owned by `email`
    async fn list_by_email(&self, email: &str) -> CartResult<Vec<CartItem>>;

    /// Insert a cart item as sent
    async fn insert(&self, item: CartItem) -> CartResult<InsertAck>;
}
