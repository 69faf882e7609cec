use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_SOURCE_LEN: u64 = 100_000;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubmitSolutionRequest {
    /// Absent in free-form compiler mode.
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub question_id: Option<String>,

    #[validate(length(max = MAX_SOURCE_LEN, message = "Source code is too large"))]
    pub source_code: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 32))]
    pub language: Option<String>,
}

impl SubmitSolutionRequest {
    pub fn for_question(question_id: &str, source_code: &str) -> Self {
        Self {
            question_id: Some(question_id.to_string()),
            source_code: source_code.to_string(),
            language: None,
        }
    }

    pub fn free_form(source_code: &str, language: &str) -> Self {
        Self {
            question_id: None,
            source_code: source_code.to_string(),
            language: Some(language.to_string()),
        }
    }

    /// Trims the identifier fields so whitespace-only values fail the
    /// length checks instead of slipping through.
    pub fn normalized(mut self) -> Self {
        self.question_id = self.question_id.map(|id| id.trim().to_string());
        self.language = self.language.map(|language| language.trim().to_string());
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    pub rating: i64,
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, 100)
    }
}
