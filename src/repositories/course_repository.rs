use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Course};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>>;
    /// Whole catalog, grouped by language then title.
    async fn list(&self) -> AppResult<Vec<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let courses = self
            .collection
            .find(doc! {})
            .sort(doc! { "language": 1, "title": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }
}
