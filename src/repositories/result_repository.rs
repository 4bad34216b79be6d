use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult>;
    /// Newest first.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>>;
    async fn delete_by_user(&self, user_id: &str) -> AppResult<u64>;
    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoResultRepository {
    collection: Collection<QuizResult>,
}

impl MongoResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("results");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        let quiz_id_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_id_index).await?;
        self.collection.create_index(quiz_id_index).await?;

        log::info!("Successfully created indexes for results collection");
        Ok(())
    }
}

#[async_trait]
impl ResultRepository for MongoResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn delete_by_user(&self, user_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "user_id": user_id })
            .await?;
        Ok(result.deleted_count)
    }

    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "quiz_id": quiz_id })
            .await?;
        Ok(result.deleted_count)
    }
}
