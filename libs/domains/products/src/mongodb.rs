//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{
    DeleteAck, InsertAck, UpdateAck,
    document::{from_stored, id_filter, to_storable},
};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::{FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Pagination, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Collection holding the product catalog
pub const COLLECTION_NAME: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "brand": 1 })
                .options(IndexOptions::builder().name("idx_brand".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Build the store filter for a product query
    pub(crate) fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = Document::new();

        if let Some(brand) = &filter.brand {
            doc.insert(
                "brand",
                doc! { "$regex": regex::escape(brand), "$options": "i" },
            );
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product))]
    async fn create(&self, product: Product) -> ProductResult<InsertAck> {
        let document = to_storable(&product)?;
        let ack = InsertAck::from(self.collection.insert_one(document).await?);

        tracing::info!(product_id = %ack.inserted_id, "Product created successfully");
        Ok(ack)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(id_filter(id)).await?;
        Ok(document.map(from_stored::<Product>).transpose()?)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: ProductFilter,
        pagination: Pagination,
    ) -> ProductResult<Vec<Product>> {
        let mongo_filter = Self::build_filter(&filter);

        let options = FindOptions::builder()
            .skip(pagination.skip())
            .limit(i64::try_from(pagination.size).unwrap_or(i64::MAX))
            .sort(doc! { "_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        let products = documents
            .into_iter()
            .map(from_stored)
            .collect::<Result<Vec<Product>, _>>()?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<UpdateAck> {
        let update = doc! { "$set": input.to_set_document()? };
        let ack = UpdateAck::from(self.collection.update_one(id_filter(id), update).await?);

        tracing::info!(
            product_id = %id,
            matched = ack.matched_count,
            "Product updated successfully"
        );
        Ok(ack)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<DeleteAck> {
        let ack = DeleteAck::from(self.collection.delete_one(id_filter(id)).await?);

        tracing::info!(
            product_id = %id,
            deleted = ack.deleted_count,
            "Product deleted successfully"
        );
        Ok(ack)
    }
}
