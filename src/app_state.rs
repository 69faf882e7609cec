use std::sync::Arc;

use crate::{
    config::Config,
    db::{Database, HealthCheck},
    errors::AppResult,
    repositories::{
        CourseRepository, MongoCourseRepository, MongoQuestionRepository,
        MongoUserProfileRepository, MongoUserProgressRepository, QuestionRepository,
        UserProfileRepository, UserProgressRepository,
    },
    services::{
        progress_service::ProgressService, question_service::QuestionService,
        ranking_service::RankingService, submission_service::SubmissionService,
        verifier::RuleBasedVerifier,
    },
};

/// Storage seams the services are built on.
pub struct Repositories {
    pub questions: Arc<dyn QuestionRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub progress: Arc<dyn UserProgressRepository>,
    pub profiles: Arc<dyn UserProfileRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub question_service: Arc<QuestionService>,
    pub progress_service: Arc<ProgressService>,
    pub ranking_service: Arc<RankingService>,
    pub db: Arc<dyn HealthCheck>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let questions = Arc::new(MongoQuestionRepository::new(&db));
        questions.ensure_indexes().await?;

        let progress = Arc::new(MongoUserProgressRepository::new(&db));
        progress.ensure_indexes().await?;

        let profiles = Arc::new(MongoUserProfileRepository::new(&db));
        profiles.ensure_indexes().await?;

        let repositories = Repositories {
            questions,
            courses: Arc::new(MongoCourseRepository::new(&db)),
            progress,
            profiles,
        };

        Ok(Self::with_repositories(config, repositories, Arc::new(db)))
    }

    pub fn with_repositories(
        config: Config,
        repositories: Repositories,
        db: Arc<dyn HealthCheck>,
    ) -> Self {
        let progress_service = Arc::new(ProgressService::new(
            repositories.progress,
            repositories.profiles.clone(),
        ));
        let question_service = Arc::new(QuestionService::new(
            repositories.questions,
            repositories.courses,
            progress_service.clone(),
        ));
        let submission_service = Arc::new(SubmissionService::new(
            Arc::new(RuleBasedVerifier::new()),
            question_service.clone(),
            progress_service.clone(),
            config.simulated_latency,
        ));
        let ranking_service = Arc::new(RankingService::new(repositories.profiles));

        Self {
            submission_service,
            question_service,
            progress_service,
            ranking_service,
            db,
            config: Arc::new(config),
        }
    }
}
