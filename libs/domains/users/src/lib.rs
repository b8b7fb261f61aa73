//! Users Domain
//!
//! User accounts in the `users` collection: registration deduplicated by
//! email, role lookup, and admin-only role grants and deletions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, duplicate-email soft response
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Ownership and admin capability checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB, unique email index)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, Role, request/response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use domain_users::{AdminConfig, MongoUserRepository, UserService, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoUserRepository::new(&client.database("gadget24"));
//! repository.init_indexes().await?;
//!
//! let service = UserService::with_admins(repository, AdminConfig::from_env()?);
//! let users = handlers::router(service.clone());
//! let admin_check = handlers::admin_check_router(service);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::AdminConfig;
pub use error::{UserError, UserResult};
pub use handlers::{AdminCheckApiDoc, ApiDoc};
pub use models::{AdminStatus, CreateUserOutcome, NewUser, Role, User, UserAlreadyExists};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
