use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::OptionalUser, errors::AppError};

#[get("/api/courses")]
async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.question_service.list_courses().await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/api/courses/{id}/questions")]
async fn get_course_questions(
    state: web::Data<AppState>,
    id: web::Path<String>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let listing = state
        .question_service
        .course_questions(&id, user.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(listing))
}
