use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile row. Created at registration by the identity provider
/// hook with a rating of zero.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub rating: i64,
    pub total_questions_solved: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn new(id: &str, username: &str, full_name: &str) -> Self {
        UserProfile {
            id: id.to_string(),
            username: username.to_string(),
            full_name: full_name.to_string(),
            rating: 0,
            total_questions_solved: 0,
            created_at: Some(Utc::now()),
        }
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    /// Applies the credit for a first solve of a question worth `points`.
    pub fn credit_solve(&mut self, points: i64) {
        self.rating += points;
        self.total_questions_solved += 1;
    }

    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
