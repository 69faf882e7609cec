use serde::{Deserialize, Serialize};

use crate::models::domain::{Course, Difficulty, Question, RatingTier, UserProfile, UserProgress};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionResult {
    pub output: String,
    pub is_execution_error: bool,
    pub is_correct: bool,
    pub language: String,
    /// Server-side attempt count; absent when nothing was persisted.
    pub attempts: Option<i64>,
    pub is_solved: Option<bool>,
    pub rating_awarded: i64,
    pub next_question_id: Option<String>,
}

/// Server-authoritative state the editor starts from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorState {
    pub question: Question,
    pub course: Option<Course>,
    pub language: String,
    pub code: String,
    pub attempts: i64,
    pub is_solved: bool,
    pub next_question_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u64,
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub rating: i64,
    pub total_questions_solved: i64,
    pub tier: String,
}

impl LeaderboardEntry {
    pub fn new(rank: u64, profile: &UserProfile) -> Self {
        LeaderboardEntry {
            rank,
            user_id: profile.id.clone(),
            username: profile.username.clone(),
            display_name: profile.display_name().to_string(),
            rating: profile.rating,
            total_questions_solved: profile.total_questions_solved,
            tier: RatingTier::from_rating(profile.rating).title().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingResponse {
    pub profile: UserProfile,
    pub rank: u64,
    pub tier: String,
    pub next_tier: Option<String>,
    pub tier_progress: f64,
}

impl StandingResponse {
    pub fn new(profile: UserProfile, rank: u64) -> Self {
        let tier = RatingTier::from_rating(profile.rating);
        StandingResponse {
            rank,
            tier: tier.title().to_string(),
            next_tier: tier.next().map(|t| t.title().to_string()),
            tier_progress: tier.progress(profile.rating),
            profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RankResponse {
    pub rating: i64,
    pub rank: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateResponse {
    pub language: String,
    pub code: String,
}

/// A solved question on the profile page, with its question and course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityEntry {
    pub question_id: String,
    pub question_title: String,
    pub difficulty: Difficulty,
    pub points: i64,
    pub course_id: String,
    pub course_title: Option<String>,
    pub language: Option<String>,
    pub attempts: i64,
    pub solved_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ActivityEntry {
    pub fn new(progress: UserProgress, question: &Question, course: Option<&Course>) -> Self {
        ActivityEntry {
            question_id: progress.question_id,
            question_title: question.title.clone(),
            difficulty: question.difficulty,
            points: question.points,
            course_id: question.course_id.clone(),
            course_title: course.map(|c| c.title.clone()),
            language: course.map(|c| c.language.clone()),
            attempts: progress.attempts,
            solved_at: progress.solved_at,
        }
    }
}

/// One row of a course's practice list. `is_solved` is only reported for a
/// signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionSummary {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub points: i64,
    pub order_index: i32,
    pub is_solved: Option<bool>,
}

impl QuestionSummary {
    pub fn new(question: &Question, is_solved: Option<bool>) -> Self {
        QuestionSummary {
            id: question.id.clone(),
            title: question.title.clone(),
            difficulty: question.difficulty,
            points: question.points,
            order_index: question.order_index,
            is_solved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseQuestions {
    pub course: Course,
    pub questions: Vec<QuestionSummary>,
    pub solved_count: Option<usize>,
}
