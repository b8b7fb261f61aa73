//! Handler tests for Categories domain

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_categories::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

struct FixedCategories(Vec<Category>);

#[async_trait]
impl CategoryRepository for FixedCategories {
    async fn list_all(&self) -> CategoryResult<Vec<Category>> {
        Ok(self.0.clone())
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_categories_returns_array() {
    let categories = vec![
        serde_json::from_value::<Category>(json!({ "_id": "66f1c0b2a4d3e5f6a7b8c9d0", "name": "Phones" }))
            .unwrap(),
        serde_json::from_value::<Category>(json!({ "name": "Laptops", "order": 2 })).unwrap(),
    ];
    let app = handlers::router(CategoryService::new(FixedCategories(categories)));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!([
            { "_id": "66f1c0b2a4d3e5f6a7b8c9d0", "name": "Phones" },
            { "name": "Laptops", "order": 2 }
        ])
    );
}

#[tokio::test]
async fn test_list_categories_empty_is_empty_array() {
    let app = handlers::router(CategoryService::new(FixedCategories(vec![])));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}
