//! Categories Domain
//!
//! Read-only access to the `categories` collection.
//!
//! ```text
//! Handlers → Service → Repository (trait + MongoDB) → Models
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::Category;
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
