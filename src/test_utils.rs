use std::sync::Arc;

use crate::{
    app_state::{AppState, Repositories},
    config::Config,
    db::MockHealthCheck,
    models::domain::{Course, Question, UserProfile},
    repositories::{
        course_repository::MockCourseRepository, question_repository::MockQuestionRepository,
        user_profile_repository::MockUserProfileRepository,
        user_progress_repository::MockUserProgressRepository,
    },
};

pub mod fixtures {
    use super::*;

    pub fn python_course() -> Course {
        Course::new("course-py", "Python Basics", "Python")
    }

    /// "Print Hello World", worth 10 points.
    pub fn hello_world_question() -> Question {
        let mut question = Question::new("course-py", "Print Hello World", "Hello, World!", 10);
        question.id = "q-hello".to_string();
        question
    }

    /// "Sum Two Numbers" over `3 5`, worth 15 points.
    pub fn sum_question() -> Question {
        let mut question =
            Question::new("course-py", "Sum Two Numbers", "8", 15).with_sample_input("3 5");
        question.id = "q-sum".to_string();
        question.order_index = 1;
        question
    }

    pub fn test_profile(id: &str, rating: i64) -> UserProfile {
        UserProfile::new(id, &format!("user_{}", id), "Test User").with_rating(rating)
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::auth::JwtService;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    pub fn jwt_service() -> JwtService {
        JwtService::new(&Config::test_config().jwt_secret)
    }

    pub fn bearer(user_id: &str) -> String {
        let token = jwt_service()
            .create_token(user_id, 1)
            .expect("token should be created");
        format!("Bearer {}", token)
    }

    /// Mocked storage, one field per repository.
    pub struct MockRepositories {
        pub questions: MockQuestionRepository,
        pub courses: MockCourseRepository,
        pub progress: MockUserProgressRepository,
        pub profiles: MockUserProfileRepository,
        pub db: MockHealthCheck,
    }

    impl MockRepositories {
        /// Question and course lookups resolve against the fixtures; nothing
        /// else has expectations.
        pub fn with_fixtures() -> Self {
            let mut questions = MockQuestionRepository::new();
            questions.expect_find_by_id().returning(|id| {
                Ok([fixtures::hello_world_question(), fixtures::sum_question()]
                    .into_iter()
                    .find(|q| q.id == id))
            });
            questions.expect_find_by_ids().returning(|ids| {
                Ok([fixtures::hello_world_question(), fixtures::sum_question()]
                    .into_iter()
                    .filter(|q| ids.contains(&q.id))
                    .collect())
            });
            questions.expect_find_next_in_course().returning(|question| {
                Ok((question.id == "q-hello").then(fixtures::sum_question))
            });
            questions.expect_list_by_course().returning(|course_id| {
                Ok([fixtures::hello_world_question(), fixtures::sum_question()]
                    .into_iter()
                    .filter(|q| q.course_id == course_id)
                    .collect())
            });

            let mut courses = MockCourseRepository::new();
            courses.expect_find_by_id().returning(|id| {
                Ok((id == fixtures::python_course().id).then(fixtures::python_course))
            });
            courses.expect_find_by_ids().returning(|ids| {
                Ok(std::iter::once(fixtures::python_course())
                    .filter(|c| ids.contains(&c.id))
                    .collect())
            });
            courses
                .expect_list()
                .returning(|| Ok(vec![fixtures::python_course()]));

            let mut db = MockHealthCheck::new();
            db.expect_health_check().returning(|| Ok(()));

            Self {
                questions,
                courses,
                progress: MockUserProgressRepository::new(),
                profiles: MockUserProfileRepository::new(),
                db,
            }
        }

        pub fn into_state(self) -> AppState {
            AppState::with_repositories(
                Config::test_config(),
                Repositories {
                    questions: Arc::new(self.questions),
                    courses: Arc::new(self.courses),
                    progress: Arc::new(self.progress),
                    profiles: Arc::new(self.profiles),
                },
                Arc::new(self.db),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_questions() {
        assert_eq!(hello_world_question().expected_output, "Hello, World!");
        assert_eq!(sum_question().sample_input(), "3 5");
        assert_eq!(sum_question().course_id, python_course().id);
    }

    #[test]
    fn test_fixture_profile() {
        let profile = test_profile("u1", 1200);
        assert_eq!(profile.username, "user_u1");
        assert_eq!(profile.rating, 1200);
    }
}
