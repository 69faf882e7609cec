pub mod progress_service;
pub mod question_service;
pub mod ranking_service;
pub mod submission_service;
pub mod verifier;
