use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Display name of the course language, e.g. "Python" or "C++".
    pub language: String,
    #[serde(default)]
    pub description: String,
}

impl Course {
    pub fn new(id: &str, title: &str, language: &str) -> Self {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            language: language.to_string(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Language key used by the editor and the verifier.
    pub fn language_key(&self) -> String {
        self.language.trim().to_lowercase()
    }
}
