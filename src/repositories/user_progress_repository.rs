use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::{is_duplicate_key, Database},
    errors::AppResult,
    models::domain::{AttemptWrite, UserProgress},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProgressRepository: Send + Sync {
    async fn find(&self, user_id: &str, question_id: &str) -> AppResult<Option<UserProgress>>;

    /// Folds one verification run into the (user, question) row in a single
    /// atomic write and returns the row as it was before the write, or
    /// `None` if this run created it. See [`UserProgress::after_attempt`].
    async fn record_attempt(&self, attempt: &AttemptWrite) -> AppResult<Option<UserProgress>>;

    async fn find_recently_solved(&self, user_id: &str, limit: i64)
        -> AppResult<Vec<UserProgress>>;

    /// Ids among `question_ids` the user has solved.
    async fn find_solved_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>>;

    async fn ensure_indexes(&self) -> AppResult<()>;
}

/// Update pipeline folding `attempt` into the stored row, or into an empty
/// one on upsert. Mirrors [`UserProgress::after_attempt`]: attempts grow by
/// one, `is_solved` and the first `solved_at` are sticky.
///
/// Caller-supplied strings go through `$literal` so a value starting with
/// `$` is never read as a field path.
pub fn attempt_pipeline(attempt: &AttemptWrite) -> Vec<Document> {
    let attempted_at = attempt.attempted_at.to_rfc3339();
    let solved_at = if attempt.solved {
        Bson::String(attempted_at.clone())
    } else {
        Bson::Null
    };

    vec![doc! {
        "$set": {
            "user_id": { "$literal": &attempt.user_id },
            "question_id": { "$literal": &attempt.question_id },
            "attempts": { "$add": [{ "$ifNull": ["$attempts", 0_i64] }, 1_i64] },
            "is_solved": { "$or": [{ "$ifNull": ["$is_solved", false] }, attempt.solved] },
            "solved_at": { "$ifNull": ["$solved_at", solved_at] },
            "solution_code": { "$literal": &attempt.source_code },
            "last_attempt_at": attempted_at,
        }
    }]
}

pub struct MongoUserProgressRepository {
    collection: Collection<UserProgress>,
}

impl MongoUserProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_progress");
        Self { collection }
    }

    async fn find_one_and_apply(
        &self,
        attempt: &AttemptWrite,
    ) -> mongodb::error::Result<Option<UserProgress>> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "user_id": &attempt.user_id, "question_id": &attempt.question_id },
                attempt_pipeline(attempt),
            )
            .with_options(options)
            .await
    }
}

#[async_trait]
impl UserProgressRepository for MongoUserProgressRepository {
    async fn find(&self, user_id: &str, question_id: &str) -> AppResult<Option<UserProgress>> {
        let progress = self
            .collection
            .find_one(doc! { "user_id": user_id, "question_id": question_id })
            .await?;
        Ok(progress)
    }

    async fn record_attempt(&self, attempt: &AttemptWrite) -> AppResult<Option<UserProgress>> {
        match self.find_one_and_apply(attempt).await {
            // Two first attempts raced on the upsert; the loser retries
            // against the row the winner inserted.
            Err(err) if is_duplicate_key(&err) => {
                log::warn!(
                    "Concurrent first attempt for user '{}' on question '{}', retrying",
                    attempt.user_id,
                    attempt.question_id
                );
                Ok(self.find_one_and_apply(attempt).await?)
            }
            other => Ok(other?),
        }
    }

    async fn find_recently_solved(
        &self,
        user_id: &str,
        limit: i64,
    ) -> AppResult<Vec<UserProgress>> {
        let progress = self
            .collection
            .find(doc! { "user_id": user_id, "is_solved": true })
            .sort(doc! { "solved_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(progress)
    }

    async fn find_solved_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let solved: Vec<UserProgress> = self
            .collection
            .find(doc! {
                "user_id": user_id,
                "is_solved": true,
                "question_id": { "$in": question_ids.to_vec() },
            })
            .await?
            .try_collect()
            .await?;
        Ok(solved.into_iter().map(|p| p.question_id).collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_progress collection");

        let user_question_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_question_unique".to_string())
                    .build(),
            )
            .build();

        let solved_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "is_solved": 1, "solved_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_solved_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_question_index).await?;
        self.collection.create_index(solved_index).await?;

        log::info!("Successfully created indexes for user_progress collection");
        Ok(())
    }
}
