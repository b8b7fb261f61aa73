use std::collections::HashMap;

use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Page index used when the query omits or garbles `page`
pub const DEFAULT_PAGE: u64 = 0;

/// Page size used when the query omits or garbles `size`
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest skip MongoDB accepts (a signed 64-bit integer)
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Catalog product.
///
/// The nine tracked attributes are named so PATCH can overwrite them, but
/// their values are stored as sent: a string `price` stays a string. Any
/// other field lands in `extra` and round-trips through the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-generated identifier (24-char hex)
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "66f1c0b2a4d3e5f6a7b8c9d0")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Phone")]
    pub name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 200)]
    pub price: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme")]
    pub brand: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Value>,

    /// Untracked fields, stored as sent
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Product {
    /// `brand` when it is stored as text
    pub fn brand_text(&self) -> Option<&str> {
        self.brand.as_ref().and_then(Value::as_str)
    }
}

/// Full overwrite of the nine tracked product fields.
///
/// Fields missing from the request are cleared, not preserved. Unknown
/// fields in the body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub brand: Option<Value>,
    pub category: Option<Value>,
    pub image: Option<Value>,
    pub quantity: Option<Value>,
    pub sold: Option<Value>,
    pub shipping: Option<Value>,
}

impl UpdateProduct {
    /// `$set` body covering every tracked field, nulls included
    pub fn to_set_document(&self) -> Result<Document, mongodb::bson::ser::Error> {
        fn opt(value: &Option<Value>) -> Result<Bson, mongodb::bson::ser::Error> {
            match value {
                Some(v) => mongodb::bson::to_bson(v),
                None => Ok(Bson::Null),
            }
        }

        Ok(doc! {
            "name": opt(&self.name)?,
            "description": opt(&self.description)?,
            "price": opt(&self.price)?,
            "brand": opt(&self.brand)?,
            "category": opt(&self.category)?,
            "image": opt(&self.image)?,
            "quantity": opt(&self.quantity)?,
            "sold": opt(&self.sold)?,
            "shipping": opt(&self.shipping)?,
        })
    }
}

/// Raw listing query as sent by the client.
///
/// `page` and `size` stay strings here so malformed values fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Zero-based page index (default 0)
    pub page: Option<String>,
    /// Page size (default 10, no upper bound)
    pub size: Option<String>,
    /// Case-insensitive substring match on `brand`
    pub brand: Option<String>,
}

impl ProductListQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            brand: self.brand.clone().filter(|b| !b.is_empty()),
        }
    }

    pub fn pagination(&self) -> Pagination {
        let page = self
            .page
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|p| *p >= 0)
            .map_or(DEFAULT_PAGE, |p| p as u64);
        let size = self
            .size
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|s| *s > 0)
            .map_or(DEFAULT_PAGE_SIZE, |s| s as u64);
        Pagination { page, size }
    }
}

/// Product filter applied to listing and counting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub brand: Option<String>,
}

/// Offset pagination; `size` is always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub size: u64,
}

impl Pagination {
    /// Documents to skip, capped at the largest offset the store accepts
    pub fn skip(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_SKIP)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated listing envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub result: Vec<Product>,
    pub total_products: u64,
    pub total_pages: u64,
}

/// Integer prefix of `raw`, accepting leading whitespace and a sign ("12abc" is 12).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(page: Option<&str>, size: Option<&str>) -> ProductListQuery {
        ProductListQuery {
            page: page.map(String::from),
            size: size.map(String::from),
            brand: None,
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7px"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(query(None, None).pagination(), Pagination { page: 0, size: 10 });
        assert_eq!(
            query(Some("abc"), Some("xyz")).pagination(),
            Pagination { page: 0, size: 10 }
        );
    }

    #[test]
    fn test_pagination_rejects_negative_and_zero() {
        assert_eq!(query(Some("-2"), Some("0")).pagination(), Pagination { page: 0, size: 10 });
        assert_eq!(query(Some("1"), Some("-5")).pagination(), Pagination { page: 1, size: 10 });
    }

    #[test]
    fn test_pagination_has_no_upper_bound() {
        let pagination = query(Some("2"), Some("5000")).pagination();
        assert_eq!(pagination, Pagination { page: 2, size: 5000 });
        assert_eq!(pagination.skip(), 10_000);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = Pagination { page: 0, size: 10 };
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
    }

    #[test]
    fn test_empty_brand_means_no_filter() {
        let q = ProductListQuery {
            brand: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(q.filter(), ProductFilter::default());
    }

    #[test]
    fn test_product_keeps_extra_fields() {
        let product: Product = serde_json::from_value(json!({
            "name": "Phone",
            "price": 200,
            "color": "red",
            "tags": ["new"]
        }))
        .unwrap();
        assert_eq!(product.name, Some(json!("Phone")));
        assert_eq!(product.price, Some(json!(200)));
        assert_eq!(product.extra.get("color"), Some(&json!("red")));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["tags"], json!(["new"]));
        assert!(back.get("_id").is_none());
        assert!(back.get("brand").is_none());
    }

    #[test]
    fn test_update_sets_missing_fields_to_null() {
        let update: UpdateProduct =
            serde_json::from_value(json!({ "name": "Phone 2", "color": "ignored" })).unwrap();
        let set = update.to_set_document().unwrap();

        assert_eq!(set.len(), 9);
        assert_eq!(set.get_str("name").unwrap(), "Phone 2");
        assert_eq!(set.get("price"), Some(&Bson::Null));
        assert!(!set.contains_key("color"));
    }

    #[test]
    fn test_tracked_fields_accept_any_json_type() {
        let product: Product = serde_json::from_value(json!({
            "name": "Phone",
            "price": "200",
            "quantity": 2.5,
            "category": { "id": 1 }
        }))
        .unwrap();
        assert_eq!(product.price, Some(json!("200")));
        assert_eq!(product.quantity, Some(json!(2.5)));
        assert_eq!(product.category, Some(json!({ "id": 1 })));

        let update: UpdateProduct = serde_json::from_value(json!({ "price": "200" })).unwrap();
        let set = update.to_set_document().unwrap();
        assert_eq!(set.get_str("price").unwrap(), "200");
    }

    #[test]
    fn test_brand_text_only_for_strings() {
        let mut product = Product {
            brand: Some(json!("Acme")),
            ..Default::default()
        };
        assert_eq!(product.brand_text(), Some("Acme"));

        product.brand = Some(json!(42));
        assert_eq!(product.brand_text(), None);
    }

    #[test]
    fn test_skip_is_capped_for_huge_pages() {
        let pagination = Pagination {
            page: u64::MAX / 2,
            size: 1000,
        };
        assert_eq!(pagination.skip(), MAX_SKIP);

        let pagination = query(Some("99999999999999999"), Some("100000")).pagination();
        assert_eq!(pagination.skip(), MAX_SKIP);
    }

    #[test]
    fn test_page_envelope_uses_camel_case() {
        let page = ProductPage {
            result: vec![],
            total_products: 3,
            total_pages: 1,
        };
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value, json!({ "result": [], "totalProducts": 3, "totalPages": 1 }));
    }
}
