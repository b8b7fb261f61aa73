use std::collections::HashMap;

use database::mongodb::InsertAck;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Stored field holding the user's role
pub const ROLE_FIELD: &str = "role";

/// Message returned when a user with the same email already exists
pub const ALREADY_EXISTS_MESSAGE: &str = "user already exists";

/// User role
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Normal,
    Admin,
}

/// A user as stored.
///
/// `role` stays a raw string so records with unexpected values still list;
/// use [`User::role`] for the typed view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "66f1c0b2a4d3e5f6a7b8c9d0")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "normal")]
    pub role: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl User {
    /// Typed role; `None` when absent or unrecognised
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// Body of `POST /users`.
///
/// Anything besides `email` is stored as sent, except `role`, which the
/// service always sets itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "a@x.com")]
    pub email: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: HashMap::new(),
        }
    }

    /// The record to insert: client fields, client role dropped, `role` set to `normal`
    pub fn into_user(mut self) -> User {
        self.extra.remove(ROLE_FIELD);
        let id = match self.extra.remove("_id") {
            Some(Value::String(id)) => Some(id),
            Some(other) => {
                self.extra.insert("_id".to_string(), other);
                None
            }
            None => None,
        };
        User {
            id,
            email: Some(self.email),
            role: Some(Role::Normal.to_string()),
            extra: self.extra,
        }
    }
}

/// Response of the admin check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

/// Soft response for a duplicate email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAlreadyExists {
    #[schema(example = "user already exists")]
    pub message: String,
    /// Always null
    pub inserted_id: Option<String>,
}

impl Default for UserAlreadyExists {
    fn default() -> Self {
        Self {
            message: ALREADY_EXISTS_MESSAGE.to_string(),
            inserted_id: None,
        }
    }
}

/// Result of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateUserOutcome {
    Created(InsertAck),
    AlreadyExists(UserAlreadyExists),
}
