use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>>;
    /// Questions of a course in practice order.
    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Question>>;
    /// The question that follows `question` inside its course, by order index.
    async fn find_next_in_course(&self, question: &Question) -> AppResult<Option<Question>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let course_order_index = IndexModel::builder()
            .keys(doc! { "course_id": 1, "order_index": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_order".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(course_order_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let questions = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "order_index": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn find_next_in_course(&self, question: &Question) -> AppResult<Option<Question>> {
        let options = FindOneOptions::builder()
            .sort(doc! { "order_index": 1 })
            .build();

        let next = self
            .collection
            .find_one(doc! {
                "course_id": &question.course_id,
                "order_index": { "$gt": question.order_index },
            })
            .with_options(options)
            .await?;
        Ok(next)
    }
}
