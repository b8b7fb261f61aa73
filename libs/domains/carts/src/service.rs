//! Cart Service

use database::mongodb::InsertAck;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{CartError, CartResult};
use crate::models::{CartItem, CartQuery};
use crate::repository::CartRepository;

pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

impl<R: CartRepository> CartService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Cart items for the email in the query; the email is mandatory
    #[instrument(skip(self))]
    pub async fn list_cart(&self, query: CartQuery) -> CartResult<Vec<CartItem>> {
        let email = query.email.ok_or(CartError::MissingEmail)?;
        self.repository.list_by_email(&email).await
    }

    #[instrument(skip(self, item), fields(email = ?item.email))]
    pub async fn add_item(&self, item: CartItem) -> CartResult<InsertAck> {
        self.repository.insert(item).await
    }
}

impl<R: CartRepository> Clone for CartService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
