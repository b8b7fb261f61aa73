//! MongoDB implementation of CartRepository

use async_trait::async_trait;
use database::mongodb::{
    InsertAck,
    document::{from_stored, to_storable},
};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::CartResult;
use crate::models::CartItem;
use crate::repository::CartRepository;

pub const COLLECTION_NAME: &str = "carts";

/// MongoDB implementation of the CartRepository
pub struct MongoCartRepository {
    collection: Collection<Document>,
}

impl MongoCartRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Index the owner email used by every cart listing
    pub async fn init_indexes(&self) -> CartResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().name("idx_email".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Cart indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[instrument(skip(self))]
    async fn list_by_email(&self, email: &str) -> CartResult<Vec<CartItem>> {
        let cursor = self.collection.find(doc! { "email": email }).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        let items = documents
            .into_iter()
            .map(from_stored)
            .collect::<Result<Vec<CartItem>, _>>()?;
        Ok(items)
    }

    #[instrument(skip(self, item), fields(email = ?item.email))]
    async fn insert(&self, item: CartItem) -> CartResult<InsertAck> {
        let document = to_storable(&item)?;
        let ack = InsertAck::from(self.collection.insert_one(document).await?);

        tracing::info!(cart_item_id = %ack.inserted_id, "Cart item added");
        Ok(ack)
    }
}
