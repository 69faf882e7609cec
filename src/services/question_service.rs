use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    constants::code_templates::{default_template, DEFAULT_LANGUAGE},
    errors::{AppError, AppResult},
    models::{
        domain::{Course, Question},
        dto::response::{ActivityEntry, CourseQuestions, EditorState, QuestionSummary},
    },
    repositories::{CourseRepository, QuestionRepository},
    services::progress_service::ProgressService,
};

pub struct QuestionService {
    question_repository: Arc<dyn QuestionRepository>,
    course_repository: Arc<dyn CourseRepository>,
    progress_service: Arc<ProgressService>,
}

impl QuestionService {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        course_repository: Arc<dyn CourseRepository>,
        progress_service: Arc<ProgressService>,
    ) -> Self {
        Self {
            question_repository,
            course_repository,
            progress_service,
        }
    }

    pub async fn get_question(&self, id: &str) -> AppResult<Question> {
        self.question_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::question_not_found(id))
    }

    /// Editor language for `question`: its course language, or the default
    /// when the course cannot be read.
    pub async fn question_language(&self, question: &Question) -> String {
        match self.course_repository.find_by_id(&question.course_id).await {
            Ok(course) => language_of(course.as_ref()),
            Err(err) => {
                log::warn!(
                    "Could not load course '{}' for question '{}': {}",
                    question.course_id,
                    question.id,
                    err
                );
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }

    /// Id of the question after `question` in its course, if any. Lookup
    /// failures are logged and reported as no successor.
    pub async fn next_question_id(&self, question: &Question) -> Option<String> {
        match self.question_repository.find_next_in_course(question).await {
            Ok(next) => next.map(|q| q.id),
            Err(err) => {
                log::warn!("Next question lookup failed for '{}': {}", question.id, err);
                None
            }
        }
    }

    /// Everything the editor needs when it opens a question. The saved
    /// solution wins over the starter template.
    pub async fn load_editor(&self, question_id: &str, user_id: Option<&str>) -> AppResult<EditorState> {
        let question = self.get_question(question_id).await?;
        let course = self.course_repository.find_by_id(&question.course_id).await?;
        let language = language_of(course.as_ref());

        let progress = match user_id {
            Some(user_id) => {
                self.progress_service
                    .find_progress(user_id, &question.id)
                    .await?
            }
            None => None,
        };

        let next_question_id = self
            .question_repository
            .find_next_in_course(&question)
            .await?
            .map(|q| q.id);

        let (code, attempts, is_solved) = match progress {
            Some(p) if !p.solution_code.is_empty() => (p.solution_code, p.attempts, p.is_solved),
            Some(p) => (default_template(&language).to_string(), p.attempts, p.is_solved),
            None => (default_template(&language).to_string(), 0, false),
        };

        Ok(EditorState {
            question,
            course,
            language,
            code,
            attempts,
            is_solved,
            next_question_id,
        })
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.course_repository.list().await
    }

    /// Practice list of a course in order. With a user, each question says
    /// whether that user has solved it.
    pub async fn course_questions(
        &self,
        course_id: &str,
        user_id: Option<&str>,
    ) -> AppResult<CourseQuestions> {
        let course = self
            .course_repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::course_not_found(course_id))?;

        let questions = self.question_repository.list_by_course(course_id).await?;

        let solved: Option<HashSet<String>> = match user_id {
            Some(user_id) => {
                let ids: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
                let solved = self
                    .progress_service
                    .solved_question_ids(user_id, &ids)
                    .await?;
                Some(solved.into_iter().collect())
            }
            None => None,
        };

        let questions: Vec<QuestionSummary> = questions
            .iter()
            .map(|q| QuestionSummary::new(q, solved.as_ref().map(|s| s.contains(&q.id))))
            .collect();
        let solved_count = solved
            .as_ref()
            .map(|_| questions.iter().filter(|q| q.is_solved == Some(true)).count());

        Ok(CourseQuestions {
            course,
            questions,
            solved_count,
        })
    }

    /// Recently solved questions with their question and course details.
    /// Rows whose question no longer exists are left out.
    pub async fn recent_activity(&self, user_id: &str, limit: i64) -> AppResult<Vec<ActivityEntry>> {
        let progress = self.progress_service.recent_activity(user_id, limit).await?;

        let question_ids: Vec<String> = progress.iter().map(|p| p.question_id.clone()).collect();
        let questions: HashMap<String, Question> = self
            .question_repository
            .find_by_ids(&question_ids)
            .await?
            .into_iter()
            .map(|q| (q.id.clone(), q))
            .collect();

        let mut course_ids: Vec<String> = questions.values().map(|q| q.course_id.clone()).collect();
        course_ids.sort();
        course_ids.dedup();
        let courses: HashMap<String, Course> = self
            .course_repository
            .find_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Ok(progress
            .into_iter()
            .filter_map(|row| match questions.get(&row.question_id) {
                Some(question) => {
                    let course = courses.get(&question.course_id);
                    Some(ActivityEntry::new(row, question, course))
                }
                None => {
                    log::debug!("Skipping activity for missing question '{}'", row.question_id);
                    None
                }
            })
            .collect())
    }
}

fn language_of(course: Option<&Course>) -> String {
    course
        .map(Course::language_key)
        .filter(|language| !language.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
