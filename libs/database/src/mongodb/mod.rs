//! MongoDB connector and helpers
//!
//! Provides connection management, health checks, write acknowledgments
//! and conversions between API models and stored documents.

pub mod ack;
mod config;
mod connector;
pub mod document;
mod health;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use config::{DEFAULT_APP_NAME, DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect, connect_from_config};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
