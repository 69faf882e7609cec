pub mod course;
pub mod question;
pub mod rating_tier;
pub mod user_profile;
pub mod user_progress;
pub use course::Course;
pub use question::{Difficulty, Question};
pub use rating_tier::RatingTier;
pub use user_profile::UserProfile;
pub use user_progress::{AttemptWrite, UserProgress};
