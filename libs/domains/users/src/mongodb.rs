//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use database::mongodb::{
    DeleteAck, InsertAck, UpdateAck,
    document::{from_stored, id_filter, is_duplicate_key, to_storable},
};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{Role, User};
use crate::repository::UserRepository;

pub const COLLECTION_NAME: &str = "users";

/// Most duplicated emails named when the unique index cannot be built
const DUPLICATE_REPORT_LIMIT: i64 = 20;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Create the unique email index that guarantees one record per email.
    ///
    /// Fails with [`UserError::DuplicateEmails`] when existing records already
    /// share an email; those must be cleaned up before the index can exist.
    pub async fn init_indexes(&self) -> UserResult<()> {
        let duplicates = self.duplicate_emails().await?;
        if !duplicates.is_empty() {
            tracing::error!(?duplicates, "Duplicate emails block the unique email index");
            return Err(UserError::DuplicateEmails(duplicates));
        }

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_email_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("User indexes created successfully");
        Ok(())
    }

    /// Emails held by more than one record; records without an email count as `null`
    pub async fn duplicate_emails(&self) -> UserResult<Vec<String>> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$email", "count": { "$sum": 1 } } },
            doc! { "$match": { "count": { "$gt": 1 } } },
            doc! { "$sort": { "_id": 1 } },
            doc! { "$limit": DUPLICATE_REPORT_LIMIT },
        ];
        let cursor = self.collection.aggregate(pipeline).await?;
        let groups: Vec<Document> = cursor.try_collect().await?;

        Ok(groups
            .iter()
            .map(|group| match group.get("_id") {
                Some(Bson::String(email)) => email.clone(),
                Some(other) => other.to_string(),
                None => Bson::Null.to_string(),
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        let users = documents
            .into_iter()
            .map(from_stored)
            .collect::<Result<Vec<User>, _>>()?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let document = self.collection.find_one(doc! { "email": email }).await?;
        Ok(document.map(from_stored::<User>).transpose()?)
    }

    #[instrument(skip(self, user))]
    async fn insert(&self, user: User) -> UserResult<InsertAck> {
        let document = to_storable(&user)?;

        match self.collection.insert_one(document).await {
            Ok(result) => {
                let ack = InsertAck::from(result);
                tracing::info!(user_id = %ack.inserted_id, "User created successfully");
                Ok(ack)
            }
            Err(e) if is_duplicate_key(&e) => {
                Err(UserError::AlreadyExists(user.email.unwrap_or_default()))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn set_role(&self, id: ObjectId, role: Role) -> UserResult<UpdateAck> {
        let update = doc! { "$set": { "role": role.to_string() } };
        let ack = UpdateAck::from(self.collection.update_one(id_filter(id), update).await?);

        tracing::info!(
            user_id = %id,
            %role,
            matched = ack.matched_count,
            "User role updated"
        );
        Ok(ack)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> UserResult<DeleteAck> {
        let ack = DeleteAck::from(self.collection.delete_one(id_filter(id)).await?);

        tracing::info!(
            user_id = %id,
            deleted = ack.deleted_count,
            "User deleted successfully"
        );
        Ok(ack)
    }
}
