#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use codepractice_server::{
    app_state::{AppState, Repositories},
    config::Config,
    db::HealthCheck,
    errors::AppResult,
    models::domain::{AttemptWrite, Course, Question, UserProfile, UserProgress},
    repositories::{
        CourseRepository, QuestionRepository, UserProfileRepository, UserProgressRepository,
    },
};

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<String, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(
                questions.into_iter().map(|q| (q.id.clone(), q)).collect(),
            )),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(ids.iter().filter_map(|id| questions.get(id).cloned()).collect())
    }

    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut listed: Vec<Question> = questions
            .values()
            .filter(|q| q.course_id == course_id)
            .cloned()
            .collect();
        listed.sort_by_key(|q| q.order_index);
        Ok(listed)
    }

    async fn find_next_in_course(&self, question: &Question) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.course_id == question.course_id && q.order_index > question.order_index)
            .min_by_key(|q| q.order_index)
            .cloned())
    }
}

pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<String, Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(RwLock::new(
                courses.into_iter().map(|c| (c.id.clone(), c)).collect(),
            )),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(ids.iter().filter_map(|id| courses.get(id).cloned()).collect())
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        let mut listed: Vec<Course> = courses.values().cloned().collect();
        listed.sort_by(|a, b| (&a.language, &a.title).cmp(&(&b.language, &b.title)));
        Ok(listed)
    }
}

/// Applies attempts under one write lock, the in-process stand-in for the
/// atomic upsert.
#[derive(Default)]
pub struct InMemoryUserProgressRepository {
    rows: Arc<RwLock<HashMap<(String, String), UserProgress>>>,
}

impl InMemoryUserProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserProgressRepository for InMemoryUserProgressRepository {
    async fn find(&self, user_id: &str, question_id: &str) -> AppResult<Option<UserProgress>> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&(user_id.to_string(), question_id.to_string()))
            .cloned())
    }

    async fn record_attempt(&self, attempt: &AttemptWrite) -> AppResult<Option<UserProgress>> {
        let mut rows = self.rows.write().await;
        let key = (attempt.user_id.clone(), attempt.question_id.clone());
        let previous = rows.get(&key).cloned();
        rows.insert(key, UserProgress::after_attempt(previous.as_ref(), attempt));
        Ok(previous)
    }

    async fn find_recently_solved(&self, user_id: &str, limit: i64) -> AppResult<Vec<UserProgress>> {
        let rows = self.rows.read().await;
        let mut solved: Vec<UserProgress> = rows
            .values()
            .filter(|p| p.user_id == user_id && p.is_solved)
            .cloned()
            .collect();
        solved.sort_by(|a, b| b.solved_at.cmp(&a.solved_at));
        solved.truncate(limit.max(0) as usize);
        Ok(solved)
    }

    async fn find_solved_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>> {
        let rows = self.rows.read().await;
        Ok(question_ids
            .iter()
            .filter(|id| {
                rows.get(&(user_id.to_string(), (*id).clone()))
                    .is_some_and(|p| p.is_solved)
            })
            .cloned()
            .collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserProfileRepository {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryUserProfileRepository {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(
                profiles.into_iter().map(|p| (p.id.clone(), p)).collect(),
            )),
        }
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(id).cloned())
    }

    async fn credit_solve(&self, id: &str, points: i64) -> AppResult<Option<UserProfile>> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles.get_mut(id).map(|profile| {
            profile.credit_solve(points);
            profile.clone()
        }))
    }

    async fn count_rated_above(&self, rating: i64) -> AppResult<u64> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().filter(|p| p.rating > rating).count() as u64)
    }

    async fn top_by_rating(&self, limit: i64) -> AppResult<Vec<UserProfile>> {
        let profiles = self.profiles.read().await;
        let mut items: Vec<UserProfile> = profiles.values().cloned().collect();
        items.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.username.cmp(&b.username)));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub fn python_course() -> Course {
    Course::new("course-py", "Python Basics", "Python")
}

pub fn hello_world_question() -> Question {
    let mut question = Question::new("course-py", "Print Hello World", "Hello, World!", 10);
    question.id = "q-hello".to_string();
    question
}

pub fn sum_question() -> Question {
    let mut question =
        Question::new("course-py", "Sum Two Numbers", "8", 15).with_sample_input("3 5");
    question.id = "q-sum".to_string();
    question.order_index = 1;
    question
}

/// Shared handles so tests can inspect storage after driving the services.
pub struct World {
    pub progress: Arc<InMemoryUserProgressRepository>,
    pub profiles: Arc<InMemoryUserProfileRepository>,
    pub state: AppState,
}

impl World {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        let progress = Arc::new(InMemoryUserProgressRepository::new());
        let profiles = Arc::new(InMemoryUserProfileRepository::new(profiles));

        let state = AppState::with_repositories(
            Config::test_config(),
            Repositories {
                questions: Arc::new(InMemoryQuestionRepository::new(vec![
                    hello_world_question(),
                    sum_question(),
                ])),
                courses: Arc::new(InMemoryCourseRepository::new(vec![python_course()])),
                progress: progress.clone(),
                profiles: profiles.clone(),
            },
            Arc::new(AlwaysHealthy),
        );

        Self {
            progress,
            profiles,
            state,
        }
    }

    pub async fn rating_of(&self, user_id: &str) -> i64 {
        self.profiles
            .find_by_id(user_id)
            .await
            .ok()
            .flatten()
            .map(|p| p.rating)
            .unwrap_or_default()
    }

    pub async fn progress_of(&self, user_id: &str, question_id: &str) -> Option<UserProgress> {
        self.progress.find(user_id, question_id).await.ok().flatten()
    }
}
