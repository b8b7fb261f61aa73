//! User Service - Business logic layer
//!
//! Ownership and capability checks live here so every entry point applies
//! the same rules:
//! - the admin check only answers for the caller's own email
//! - granting admin and deleting users require the admin capability

use axum_helpers::Identity;
use database::mongodb::{DeleteAck, InsertAck, UpdateAck};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::config::AdminConfig;
use crate::error::{UserError, UserResult};
use crate::models::{NewUser, Role, User};
use crate::repository::UserRepository;

/// User service providing account and role operations
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    admins: Arc<AdminConfig>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a service with no operator-listed admins
    pub fn new(repository: R) -> Self {
        Self::with_admins(repository, AdminConfig::default())
    }

    pub fn with_admins(repository: R, admins: AdminConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            admins: Arc::new(admins),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list_all().await
    }

    /// Whether `email` belongs to an admin. Callers may only ask about themselves.
    #[instrument(skip(self, identity), fields(caller = %identity.email))]
    pub async fn is_admin(&self, identity: &Identity, email: &str) -> UserResult<bool> {
        if identity.email != email {
            tracing::warn!(requested = %email, "Admin check for another user refused");
            return Err(UserError::Forbidden);
        }

        let user = self.repository.find_by_email(email).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }

    /// Insert a new user with the `normal` role.
    ///
    /// A taken email surfaces as `UserError::AlreadyExists`.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: NewUser) -> UserResult<InsertAck> {
        self.repository.insert(input.into_user()).await
    }

    /// Grant the admin role to a user
    #[instrument(skip(self, identity), fields(caller = %identity.email))]
    pub async fn set_admin(&self, identity: &Identity, id: ObjectId) -> UserResult<UpdateAck> {
        self.require_admin(identity).await?;
        self.repository.set_role(id, Role::Admin).await
    }

    #[instrument(skip(self, identity), fields(caller = %identity.email))]
    pub async fn delete_user(&self, identity: &Identity, id: ObjectId) -> UserResult<DeleteAck> {
        self.require_admin(identity).await?;
        self.repository.delete(id).await
    }

    /// Listed operators pass without a lookup; everyone else needs a stored admin role.
    async fn require_admin(&self, identity: &Identity) -> UserResult<()> {
        if self.admins.is_listed(&identity.email) {
            return Ok(());
        }

        match self.repository.find_by_email(&identity.email).await? {
            Some(user) if user.is_admin() => Ok(()),
            _ => {
                tracing::warn!("Admin capability required");
                Err(UserError::Forbidden)
            }
        }
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            admins: Arc::clone(&self.admins),
        }
    }
}
