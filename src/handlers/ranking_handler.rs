use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{LimitParams, RankQuery},
        response::RankResponse,
    },
};

const DEFAULT_ACTIVITY_LIMIT: i64 = 10;

#[get("/api/rank")]
async fn get_rank(
    state: web::Data<AppState>,
    query: web::Query<RankQuery>,
) -> Result<HttpResponse, AppError> {
    let rating = query.rating;
    let rank = state.ranking_service.rank(rating).await?;
    Ok(HttpResponse::Ok().json(RankResponse { rating, rank }))
}

#[get("/api/leaderboard")]
async fn get_leaderboard(
    state: web::Data<AppState>,
    query: web::Query<LimitParams>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit_or(state.config.leaderboard_limit);
    let entries = state.ranking_service.leaderboard(limit).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[get("/api/users/me/standing")]
async fn get_my_standing(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let standing = state.ranking_service.standing(auth.0.user_id()).await?;
    Ok(HttpResponse::Ok().json(standing))
}

#[get("/api/users/me/activity")]
async fn get_my_activity(
    state: web::Data<AppState>,
    query: web::Query<LimitParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit_or(DEFAULT_ACTIVITY_LIMIT);
    let activity = state
        .question_service
        .recent_activity(auth.0.user_id(), limit)
        .await?;
    Ok(HttpResponse::Ok().json(activity))
}
