//! Carts API routes

use axum::Router;
use domain_carts::{CartService, MongoCartRepository, handlers};
use eyre::WrapErr;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoCartRepository::new(&state.db);
    handlers::router(CartService::new(repository))
}

pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoCartRepository::new(db)
        .init_indexes()
        .await
        .wrap_err("Failed to create cart indexes")
}
