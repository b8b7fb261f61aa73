//! Application state management.
//!
//! The state is built once in `main` and handed to every router factory,
//! which turns it into per-domain services.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Verifies caller identity tokens
    pub jwt: JwtAuth,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        let jwt = JwtAuth::new(&config.jwt);
        Self {
            config,
            mongo_client,
            db,
            jwt,
        }
    }
}
