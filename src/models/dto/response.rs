use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Question, Quiz, QuizResult, User, UserRole};

/// User as exposed to clients: everything except the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub question_text: String,
    pub options: Vec<OptionView>,
    pub correct_option_index: usize,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        let correct = question.correct_option_index;
        QuestionView {
            question_text: question.question_text,
            options: question
                .options
                .into_iter()
                .enumerate()
                .map(|(index, text)| OptionView {
                    text,
                    is_correct: index == correct,
                })
                .collect(),
            correct_option_index: correct,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuestionView>,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        QuizView {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz.questions.into_iter().map(QuestionView::from).collect(),
            created_by: quiz.created_by,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub role: UserRole,
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct QuizMutationResponse {
    pub message: String,
    pub quiz: QuizView,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub score: u32,
    pub total: u32,
}

/// One ledger entry joined with its quiz title for the profile view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub id: String,
    pub quiz_id: String,
    pub quiz_title: String,
    pub score: u32,
    pub total: u32,
    pub created_at: DateTime<Utc>,
}

impl ResultView {
    pub fn new(result: QuizResult, quiz_title: &str) -> Self {
        ResultView {
            id: result.id,
            quiz_id: result.quiz_id,
            quiz_title: quiz_title.to_string(),
            score: result.score,
            total: result.total,
            created_at: result.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserView,
    pub results: Vec<ResultView>,
}
