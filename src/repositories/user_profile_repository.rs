use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::UserProfile};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>>;

    /// Atomically adds `points` to the rating and one to the solved count.
    /// Returns the updated profile, or `None` when no profile exists.
    async fn credit_solve(&self, id: &str, points: i64) -> AppResult<Option<UserProfile>>;

    async fn count_rated_above(&self, rating: i64) -> AppResult<u64>;
    async fn top_by_rating(&self, limit: i64) -> AppResult<Vec<UserProfile>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserProfileRepository {
    collection: Collection<UserProfile>,
}

impl MongoUserProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_profiles");
        Self { collection }
    }
}

#[async_trait]
impl UserProfileRepository for MongoUserProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let profile = self.collection.find_one(doc! { "id": id }).await?;
        Ok(profile)
    }

    async fn credit_solve(&self, id: &str, points: i64) -> AppResult<Option<UserProfile>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let profile = self
            .collection
            .find_one_and_update(
                doc! { "id": id },
                doc! { "$inc": { "rating": points, "total_questions_solved": 1_i64 } },
            )
            .with_options(options)
            .await?;
        Ok(profile)
    }

    async fn count_rated_above(&self, rating: i64) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "rating": { "$gt": rating } })
            .await?;
        Ok(count)
    }

    async fn top_by_rating(&self, limit: i64) -> AppResult<Vec<UserProfile>> {
        let profiles = self
            .collection
            .find(doc! {})
            .sort(doc! { "rating": -1, "username": 1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(profiles)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_profiles collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let rating_index = IndexModel::builder()
            .keys(doc! { "rating": -1 })
            .options(IndexOptions::builder().name("rating_desc".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(rating_index).await?;

        log::info!("Successfully created indexes for user_profiles collection");
        Ok(())
    }
}
