use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Question, UserRole};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,

    /// Optional elevation, used to seed administrators.
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Question-level constraints (non-empty text, option count, index bounds)
/// are enforced by the quiz write path, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub question_text: String,

    pub options: Vec<String>,

    pub correct_option_index: usize,
}

impl From<QuestionInput> for Question {
    fn from(input: QuestionInput) -> Self {
        Question {
            question_text: input.question_text,
            options: input.options,
            correct_option_index: input.correct_option_index,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub questions: Vec<QuestionInput>,
}

/// Partial update: absent title/description are left untouched; a questions
/// array, when present, replaces the whole set and is re-validated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub questions: Option<Vec<QuestionInput>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    /// One selected option index per question, in question order. Out-of-range
    /// or negative values are legal input that simply never match.
    pub answers: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}
