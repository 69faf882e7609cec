use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user, per-question progress. One row per (user_id, question_id).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProgress {
    pub user_id: String,
    pub question_id: String,
    pub is_solved: bool,
    pub solution_code: String,
    pub attempts: i64,
    #[serde(default)]
    pub solved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_attempt_at: Option<DateTime<Utc>>,
}

/// A single verification run to be folded into a progress row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptWrite {
    pub user_id: String,
    pub question_id: String,
    pub source_code: String,
    pub solved: bool,
    pub attempted_at: DateTime<Utc>,
}

impl AttemptWrite {
    pub fn new(user_id: &str, question_id: &str, source_code: &str, solved: bool) -> Self {
        AttemptWrite {
            user_id: user_id.to_string(),
            question_id: question_id.to_string(),
            source_code: source_code.to_string(),
            solved,
            attempted_at: Utc::now(),
        }
    }
}

impl UserProgress {
    /// Row state after `attempt` is applied on top of `previous`.
    ///
    /// Attempts grow by one per run. The solved flag and the first solve
    /// timestamp are sticky: a failed run after a success keeps both.
    pub fn after_attempt(previous: Option<&UserProgress>, attempt: &AttemptWrite) -> UserProgress {
        let was_solved = previous.map(|p| p.is_solved).unwrap_or(false);
        let previous_solved_at = previous.and_then(|p| p.solved_at);

        UserProgress {
            user_id: attempt.user_id.clone(),
            question_id: attempt.question_id.clone(),
            is_solved: was_solved || attempt.solved,
            solution_code: attempt.source_code.clone(),
            attempts: previous.map(|p| p.attempts).unwrap_or(0) + 1,
            solved_at: previous_solved_at.or(if attempt.solved {
                Some(attempt.attempted_at)
            } else {
                None
            }),
            last_attempt_at: Some(attempt.attempted_at),
        }
    }

    /// True when `attempt` is the first successful run for the pair.
    pub fn is_first_solve(previous: Option<&UserProgress>, attempt: &AttemptWrite) -> bool {
        attempt.solved && !previous.map(|p| p.is_solved).unwrap_or(false)
    }
}
