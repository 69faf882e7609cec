//! Client-side editor state.
//!
//! The UI owns one [`EditorSession`] and changes it only through
//! [`EditorSession::apply`]. Attempts and solved state are server-owned:
//! a finished run bumps the local attempt count optimistically and the
//! server's numbers replace it as soon as they arrive.

use serde::{Deserialize, Serialize};

use crate::{
    constants::code_templates::{default_template, DEFAULT_LANGUAGE},
    models::{
        domain::UserProgress,
        dto::response::{EditorState, SubmissionResult},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorSession {
    pub question_id: Option<String>,
    pub language: String,
    pub code: String,
    pub output: String,
    pub is_running: bool,
    pub is_correct: bool,
    pub is_solved: bool,
    pub attempts: i64,
    pub next_question_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum EditorEvent {
    Loaded(EditorState),
    CodeEdited(String),
    LanguageSelected(String),
    RunStarted,
    RunFinished(SubmissionResult),
    Reconciled(UserProgress),
}

/// Why an event was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    RunInProgress,
    NoRunInProgress,
}

impl Default for EditorSession {
    fn default() -> Self {
        EditorSession {
            question_id: None,
            language: DEFAULT_LANGUAGE.to_string(),
            code: String::new(),
            output: String::new(),
            is_running: false,
            is_correct: false,
            is_solved: false,
            attempts: 0,
            next_question_id: None,
        }
    }
}

impl EditorSession {
    /// Free-form compiler session with the starter code for `language`.
    pub fn free_form(language: &str) -> Self {
        EditorSession {
            language: language.to_lowercase(),
            code: default_template(language).to_string(),
            ..Default::default()
        }
    }

    pub fn apply(&mut self, event: EditorEvent) -> Result<(), Rejected> {
        match event {
            EditorEvent::Loaded(state) => {
                *self = EditorSession {
                    question_id: Some(state.question.id),
                    language: state.language,
                    code: state.code,
                    is_correct: state.is_solved,
                    is_solved: state.is_solved,
                    attempts: state.attempts,
                    next_question_id: state.next_question_id,
                    ..Default::default()
                };
            }
            EditorEvent::CodeEdited(code) => self.code = code,
            EditorEvent::LanguageSelected(language) => self.language = language.to_lowercase(),
            EditorEvent::RunStarted => {
                if self.is_running {
                    return Err(Rejected::RunInProgress);
                }
                self.is_running = true;
                self.output.clear();
            }
            EditorEvent::RunFinished(result) => {
                if !self.is_running {
                    return Err(Rejected::NoRunInProgress);
                }
                self.is_running = false;
                self.output = result.output;
                self.is_correct = result.is_correct;

                if self.question_id.is_some() {
                    self.attempts = result.attempts.unwrap_or(self.attempts + 1);
                    self.is_solved = result
                        .is_solved
                        .unwrap_or(self.is_solved || result.is_correct);
                }
                if result.next_question_id.is_some() {
                    self.next_question_id = result.next_question_id;
                }
            }
            EditorEvent::Reconciled(progress) => {
                if self.question_id.as_deref() == Some(progress.question_id.as_str()) {
                    self.attempts = progress.attempts;
                    self.is_solved = progress.is_solved;
                }
            }
        }
        Ok(())
    }

    pub fn can_run(&self) -> bool {
        !self.is_running
    }
}
