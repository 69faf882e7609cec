use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub problem_statement: String,
    #[serde(default)]
    pub sample_input: Option<String>,
    pub expected_output: String,
    pub difficulty: Difficulty,
    pub points: i64,
    #[serde(default)]
    pub order_index: i32,
}

impl Question {
    pub fn new(course_id: &str, title: &str, expected_output: &str, points: i64) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            problem_statement: String::new(),
            sample_input: None,
            expected_output: expected_output.to_string(),
            difficulty: Difficulty::Easy,
            points,
            order_index: 0,
        }
    }

    pub fn with_sample_input(mut self, sample_input: &str) -> Self {
        self.sample_input = Some(sample_input.to_string());
        self
    }

    pub fn sample_input(&self) -> &str {
        self.sample_input.as_deref().unwrap_or("")
    }
}
