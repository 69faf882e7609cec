pub mod course_handler;
pub mod health_handler;
pub mod question_handler;
pub mod ranking_handler;
pub mod submission_handler;

use actix_web::web;

use crate::errors::AppError;

pub use course_handler::{get_course_questions, list_courses};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use question_handler::{get_editor, get_template};
pub use ranking_handler::{get_leaderboard, get_my_activity, get_my_standing, get_rank};
pub use submission_handler::submit_solution;

/// Room for the largest accepted source after JSON escaping.
const JSON_PAYLOAD_LIMIT: usize = 1024 * 1024;

/// JSON extractor settings shared by every route: malformed bodies become
/// `VALIDATION_ERROR` responses like any other bad input.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(list_courses)
        .service(get_course_questions)
        .service(submit_solution)
        .service(get_editor)
        .service(get_template)
        .service(get_rank)
        .service(get_leaderboard)
        .service(get_my_standing)
        .service(get_my_activity);
}
