use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{AttemptWrite, Question, UserProfile, UserProgress},
    repositories::{UserProfileRepository, UserProgressRepository},
};

/// What a recorded attempt changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub progress: UserProgress,
    pub first_solve: bool,
    /// Points credited by this run; zero unless the credit was persisted.
    pub rating_awarded: i64,
    pub profile: Option<UserProfile>,
}

pub struct ProgressService {
    progress_repository: Arc<dyn UserProgressRepository>,
    profile_repository: Arc<dyn UserProfileRepository>,
}

impl ProgressService {
    pub fn new(
        progress_repository: Arc<dyn UserProgressRepository>,
        profile_repository: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            progress_repository,
            profile_repository,
        }
    }

    /// Records one verification run for the signed-in user.
    ///
    /// Returns `None` without a user or a question, and when the progress
    /// write fails. Persistence errors are logged, never returned: the
    /// caller's verdict stands regardless.
    pub async fn record_attempt(
        &self,
        user_id: Option<&str>,
        question: Option<&Question>,
        source_code: &str,
        solved: bool,
    ) -> Option<AttemptOutcome> {
        let (Some(user_id), Some(question)) = (user_id, question) else {
            return None;
        };

        let attempt = AttemptWrite::new(user_id, &question.id, source_code, solved);

        let previous = match self.progress_repository.record_attempt(&attempt).await {
            Ok(previous) => previous,
            Err(err) => {
                log::error!(
                    "Failed to record attempt for user '{}' on question '{}': {}",
                    user_id,
                    question.id,
                    err
                );
                return None;
            }
        };

        let first_solve = UserProgress::is_first_solve(previous.as_ref(), &attempt);
        let mut outcome = AttemptOutcome {
            progress: UserProgress::after_attempt(previous.as_ref(), &attempt),
            first_solve,
            rating_awarded: 0,
            profile: None,
        };

        if first_solve && question.points <= 0 {
            log::warn!(
                "Question '{}' has non-positive points ({}); rating for user '{}' not credited",
                question.id,
                question.points,
                user_id
            );
        } else if first_solve {
            match self
                .profile_repository
                .credit_solve(user_id, question.points)
                .await
            {
                Ok(Some(profile)) => {
                    log::info!(
                        "User '{}' solved question '{}' (+{} rating, now {})",
                        user_id,
                        question.id,
                        question.points,
                        profile.rating
                    );
                    outcome.rating_awarded = question.points;
                    outcome.profile = Some(profile);
                }
                Ok(None) => log::warn!(
                    "No profile for user '{}'; rating for question '{}' not credited",
                    user_id,
                    question.id
                ),
                Err(err) => log::error!(
                    "Failed to credit rating for user '{}' on question '{}': {}",
                    user_id,
                    question.id,
                    err
                ),
            }
        }

        Some(outcome)
    }

    pub async fn find_progress(
        &self,
        user_id: &str,
        question_id: &str,
    ) -> AppResult<Option<UserProgress>> {
        self.progress_repository.find(user_id, question_id).await
    }

    pub async fn solved_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>> {
        self.progress_repository
            .find_solved_question_ids(user_id, question_ids)
            .await
    }

    pub async fn recent_activity(&self, user_id: &str, limit: i64) -> AppResult<Vec<UserProgress>> {
        self.progress_repository
            .find_recently_solved(user_id, limit)
            .await
    }
}
