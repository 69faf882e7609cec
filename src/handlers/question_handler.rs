use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::OptionalUser,
    constants::code_templates::default_template,
    errors::AppError,
    models::dto::response::TemplateResponse,
};

#[get("/api/questions/{id}/editor")]
async fn get_editor(
    state: web::Data<AppState>,
    id: web::Path<String>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let editor = state
        .question_service
        .load_editor(&id, user.user_id())
        .await?;
    Ok(HttpResponse::Ok().json(editor))
}

#[get("/api/templates/{language}")]
async fn get_template(language: web::Path<String>) -> HttpResponse {
    let language = language.trim().to_lowercase();
    let code = default_template(&language).to_string();
    HttpResponse::Ok().json(TemplateResponse { language, code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header::AUTHORIZATION, http::StatusCode, test, App};

    use crate::{
        auth::AuthMiddleware,
        models::{
            domain::{AttemptWrite, UserProgress},
            dto::response::EditorState,
        },
        test_utils::test_helpers::{bearer, jwt_service, MockRepositories},
    };

    macro_rules! app {
        ($repos:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($repos.into_state()))
                    .app_data(web::Data::new(jwt_service()))
                    .wrap(AuthMiddleware)
                    .service(get_editor)
                    .service(get_template),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn editor_for_anonymous_user_uses_template() {
        let app = app!(MockRepositories::with_fixtures());

        let req = test::TestRequest::get()
            .uri("/api/questions/q-hello/editor")
            .to_request();
        let editor: EditorState = test::call_and_read_body_json(&app, req).await;

        assert_eq!(editor.question.id, "q-hello");
        assert_eq!(editor.language, "python");
        assert_eq!(editor.code, default_template("python"));
        assert_eq!(editor.attempts, 0);
        assert_eq!(editor.next_question_id.as_deref(), Some("q-sum"));
    }

    #[actix_web::test]
    async fn editor_for_signed_in_user_restores_solution() {
        let mut repos = MockRepositories::with_fixtures();
        repos
            .progress
            .expect_find()
            .withf(|user_id: &str, question_id: &str| user_id == "user-1" && question_id == "q-sum")
            .returning(|user_id, question_id| {
                let first = AttemptWrite::new(user_id, question_id, "print(1)", false);
                let second = AttemptWrite::new(user_id, question_id, "print(a + b)", true);
                let row = UserProgress::after_attempt(None, &first);
                Ok(Some(UserProgress::after_attempt(Some(&row), &second)))
            });
        let app = app!(repos);

        let req = test::TestRequest::get()
            .uri("/api/questions/q-sum/editor")
            .insert_header((AUTHORIZATION, bearer("user-1")))
            .to_request();
        let editor: EditorState = test::call_and_read_body_json(&app, req).await;

        assert_eq!(editor.code, "print(a + b)");
        assert_eq!(editor.attempts, 2);
        assert!(editor.is_solved);
        assert!(editor.next_question_id.is_none());
    }

    #[actix_web::test]
    async fn editor_for_unknown_question_is_404() {
        let app = app!(MockRepositories::with_fixtures());

        let req = test::TestRequest::get()
            .uri("/api/questions/nope/editor")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn template_lookup_is_case_insensitive() {
        let app = app!(MockRepositories::with_fixtures());

        let req = test::TestRequest::get().uri("/api/templates/Java").to_request();
        let template: TemplateResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(template.language, "java");
        assert_eq!(template.code, default_template("java"));
    }

    #[actix_web::test]
    async fn unknown_language_gets_python_template() {
        let app = app!(MockRepositories::with_fixtures());

        let req = test::TestRequest::get().uri("/api/templates/cobol").to_request();
        let template: TemplateResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(template.code, default_template("python"));
    }
}
