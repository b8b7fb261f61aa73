//! Handler tests for Carts domain

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::InsertAck;
use domain_carts::{CartItem, CartRepository, CartResult, CartService, handlers};
use http_body_util::BodyExt;
use ::mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

#[derive(Default, Clone)]
struct InMemoryCartRepository {
    items: Arc<Mutex<Vec<CartItem>>>,
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn list_by_email(&self, email: &str) -> CartResult<Vec<CartItem>> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().filter(|i| i.email.as_deref() == Some(email)).cloned().collect())
    }

    async fn insert(&self, mut item: CartItem) -> CartResult<InsertAck> {
        let id = ObjectId::new().to_hex();
        item.id = Some(id.clone());
        self.items.lock().unwrap().push(item);
        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_item(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_add_items_then_list_by_owner() {
    let app = handlers::router(CartService::new(InMemoryCartRepository::default()));

    let response = app
        .clone()
        .oneshot(post_item(json!({ "email": "a@x.com", "name": "Phone", "price": 200 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: InsertAck = json_body(response.into_body()).await;
    assert!(ack.acknowledged);

    app.clone()
        .oneshot(post_item(json!({ "email": "b@x.com", "name": "Lamp" })))
        .await
        .unwrap();

    let response = app.oneshot(get("/?email=a%40x.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("Phone"));
    assert_eq!(items[0]["_id"], json!(ack.inserted_id));
}

#[tokio::test]
async fn test_list_without_email_is_bad_request() {
    let app = handlers::router(CartService::new(InMemoryCartRepository::default()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], json!("BAD_REQUEST"));
    assert_eq!(body["message"], json!("email query parameter is required"));
}

#[tokio::test]
async fn test_list_for_unknown_email_is_empty() {
    let app = handlers::router(CartService::new(InMemoryCartRepository::default()));

    let response = app.oneshot(get("/?email=nobody@x.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Value> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_add_item_without_email_is_stored_as_sent() {
    let repo = InMemoryCartRepository::default();
    let app = handlers::router(CartService::new(repo.clone()));

    let response = app
        .oneshot(post_item(json!({ "name": "Phone", "quantity": 2 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: InsertAck = json_body(response.into_body()).await;

    let items = repo.items.lock().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        serde_json::to_value(&items[0]).unwrap(),
        json!({ "_id": ack.inserted_id, "name": "Phone", "quantity": 2 })
    );
}
