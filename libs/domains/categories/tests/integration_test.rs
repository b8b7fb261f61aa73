//! Integration tests against a real MongoDB (testcontainers).

use domain_categories::*;
use ::mongodb::bson::{Document, doc};
use test_utils::{TestDataBuilder, TestMongo};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_all_exposes_hex_ids() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("categories_list");
    let db = mongo.database(&builder.database_name());

    db.collection::<Document>("categories")
        .insert_many([doc! { "name": "Phones" }, doc! { "name": "Laptops", "order": 2 }])
        .await
        .unwrap();

    let service = CategoryService::new(MongoCategoryRepository::new(&db));
    let categories = service.list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert!(categories.iter().all(|c| c.id.as_ref().is_some_and(|id| id.len() == 24)));
    assert!(categories.iter().any(|c| c.name.as_deref() == Some("Laptops")));
}
