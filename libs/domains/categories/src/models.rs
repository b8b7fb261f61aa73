use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Product category.
///
/// Categories are maintained outside this service; everything besides the
/// identifier and `name` is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "66f1c0b2a4d3e5f6a7b8c9d0")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Phones")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
