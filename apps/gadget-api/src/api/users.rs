//! Users API routes
//!
//! The `/users` collection and the `/user` admin check share one service so
//! both see the same operator admin list.

use axum::Router;
use domain_users::{MongoUserRepository, UserService, handlers};
use eyre::WrapErr;

use crate::state::AppState;

fn service(state: &AppState) -> UserService<MongoUserRepository> {
    let repository = MongoUserRepository::new(&state.db);
    UserService::with_admins(repository, state.config.admins.clone())
}

/// Routers for `/users` and `/user`, in that order
pub fn routers(state: &AppState) -> (Router, Router) {
    let service = service(state);
    (
        handlers::router(service.clone()),
        handlers::admin_check_router(service),
    )
}

/// Create the unique email index that backs duplicate detection.
///
/// Startup stops here, naming the emails, when existing records share one.
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoUserRepository::new(db)
        .init_indexes()
        .await
        .wrap_err("Failed to create user indexes")
}
