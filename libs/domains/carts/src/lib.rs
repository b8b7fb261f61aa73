//! Carts Domain
//!
//! Shopping cart items in the `carts` collection, listed per owner email.
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

pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use models::{CartItem, CartQuery};
pub use mongodb::MongoCartRepository;
pub use repository::CartRepository;
pub use service::CartService;
