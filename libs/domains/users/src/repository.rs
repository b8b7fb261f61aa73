use async_trait::async_trait;
use database::mongodb::{DeleteAck, InsertAck, UpdateAck};
use mongodb::bson::oid::ObjectId;

use crate::error::UserResult;
use crate::models::{Role, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, unfiltered
    async fn list_all(&self) -> UserResult<Vec<User>>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert a user; fails with `UserError::AlreadyExists` when the email is taken
    async fn insert(&self, user: User) -> UserResult<InsertAck>;

    /// Set the role of a user
    async fn set_role(&self, id: ObjectId, role: Role) -> UserResult<UpdateAck>;

    /// Delete a user by ID
    async fn delete(&self, id: ObjectId) -> UserResult<DeleteAck>;
}
