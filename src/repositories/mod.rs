pub mod course_repository;
pub mod question_repository;
pub mod user_profile_repository;
pub mod user_progress_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use user_profile_repository::{MongoUserProfileRepository, UserProfileRepository};
pub use user_progress_repository::{MongoUserProgressRepository, UserProgressRepository};
