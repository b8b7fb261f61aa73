//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};
use eyre::WrapErr;

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    handlers::router(ProductService::new(repository))
}

/// Create the brand index used by the list filter
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoProductRepository::new(db)
        .init_indexes()
        .await
        .wrap_err("Failed to create product indexes")
}
