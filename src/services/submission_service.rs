use std::{sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    constants::code_templates::DEFAULT_LANGUAGE,
    errors::AppResult,
    models::dto::{request::SubmitSolutionRequest, response::SubmissionResult},
    services::{
        progress_service::ProgressService, question_service::QuestionService, verifier::Verifier,
    },
};

/// Runs a submission through verification and records the outcome.
pub struct SubmissionService {
    verifier: Arc<dyn Verifier>,
    question_service: Arc<QuestionService>,
    progress_service: Arc<ProgressService>,
    latency: Duration,
}

impl SubmissionService {
    pub fn new(
        verifier: Arc<dyn Verifier>,
        question_service: Arc<QuestionService>,
        progress_service: Arc<ProgressService>,
        latency: Duration,
    ) -> Self {
        Self {
            verifier,
            question_service,
            progress_service,
            latency,
        }
    }

    pub async fn submit(
        &self,
        user_id: Option<&str>,
        request: SubmitSolutionRequest,
    ) -> AppResult<SubmissionResult> {
        let request = request.normalized();
        request.validate()?;

        let question = match request.question_id.as_deref() {
            Some(id) => Some(self.question_service.get_question(id).await?),
            None => None,
        };

        let language = match (request.language.as_deref(), question.as_ref()) {
            (Some(language), _) => language.trim().to_lowercase(),
            (None, Some(question)) => self.question_service.question_language(question).await,
            (None, None) => DEFAULT_LANGUAGE.to_string(),
        };

        let verification = self
            .verifier
            .verify(question.as_ref(), &request.source_code, &language);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let is_correct = verification.is_correct_for(question.as_ref());

        log::debug!(
            "Submission for {:?} in {}: correct={} error={}",
            request.question_id,
            language,
            is_correct,
            verification.is_execution_error
        );

        let outcome = self
            .progress_service
            .record_attempt(user_id, question.as_ref(), &request.source_code, is_correct)
            .await;

        let next_question_id = match question.as_ref() {
            Some(question) if is_correct => self.question_service.next_question_id(question).await,
            _ => None,
        };

        Ok(SubmissionResult {
            output: verification.output,
            is_execution_error: verification.is_execution_error,
            is_correct,
            language,
            attempts: outcome.as_ref().map(|o| o.progress.attempts),
            is_solved: outcome.as_ref().map(|o| o.progress.is_solved),
            rating_awarded: outcome.as_ref().map(|o| o.rating_awarded).unwrap_or(0),
            next_question_id,
        })
    }
}
