use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single multiple-choice question. Only the index of the correct option
/// is stored; any per-option "is correct" view is derived at read time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl Question {
    pub fn correct_index_in_range(&self) -> bool {
        self.correct_option_index < self.options.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
    /// Owner reference, not ownership: the quiz outlives its creator.
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        title: &str,
        description: Option<String>,
        questions: Vec<Question>,
        created_by: &str,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            questions,
            created_by: created_by.to_string(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
