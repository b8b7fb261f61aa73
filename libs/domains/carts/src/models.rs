use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// An item in a shopping cart, normally owned by `email`.
///
/// The body is stored as sent: `email` may be missing and product details
/// are opaque. Nothing checks that the referenced product exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "66f1c0b2a4d3e5f6a7b8c9d0")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "a@x.com")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl CartItem {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
            extra: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Query for `GET /carts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CartQuery {
    /// Owner email; required
    pub email: Option<String>,
}
