//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use database::mongodb::document::from_stored;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::CategoryResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

pub const COLLECTION_NAME: &str = "categories";

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<Document>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> CategoryResult<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        let categories = documents
            .into_iter()
            .map(from_stored)
            .collect::<Result<Vec<Category>, _>>()?;
        tracing::debug!(count = categories.len(), "Categories loaded");
        Ok(categories)
    }
}
