use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState, auth::OptionalUser, errors::AppError,
    models::dto::request::SubmitSolutionRequest,
};

#[post("/api/submissions")]
async fn submit_solution(
    state: web::Data<AppState>,
    request: web::Json<SubmitSolutionRequest>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .submission_service
        .submit(user.user_id(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
