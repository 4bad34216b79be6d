use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::request::{CreateQuizRequest, UpdateQuizRequest},
    },
    repositories::{QuizRepository, ResultRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, results: Arc<dyn ResultRepository>) -> Self {
        Self { quizzes, results }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest, created_by: &str) -> AppResult<Quiz> {
        request.validate()?;

        let questions: Vec<Question> = request.questions.into_iter().map(Question::from).collect();
        validate_questions(&questions)?;

        let quiz = Quiz::new(
            request.title.trim(),
            normalize_description(request.description),
            questions,
            created_by,
        );

        self.quizzes.create(quiz).await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.find_all().await
    }

    /// Partial update of title/description; a provided questions array replaces
    /// the whole set and is validated exactly like on create. Last writer wins.
    pub async fn update_quiz(&self, id: &str, request: UpdateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let mut quiz = self.get_quiz(id).await?;

        if let Some(title) = request.title {
            quiz.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            quiz.description = normalize_description(Some(description));
        }
        if let Some(question_inputs) = request.questions {
            let questions: Vec<Question> =
                question_inputs.into_iter().map(Question::from).collect();
            validate_questions(&questions)?;
            quiz.questions = questions;
        }
        quiz.updated_at = Some(Utc::now());

        self.quizzes.replace(quiz).await
    }

    /// Removes the quiz and every Result referencing it. Results go first, so
    /// a failure between the two steps never leaves orphaned ledger entries.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<u64> {
        if self.quizzes.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        let removed_results = self.results.delete_by_quiz(id).await?;
        self.quizzes.delete(id).await?;

        log::info!(
            "Deleted quiz '{}' and {} associated result(s)",
            id,
            removed_results
        );

        Ok(removed_results)
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.and_then(|d| {
        let trimmed = d.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Write-path validation shared by create and update: the correct-option
/// index is the single source of truth, so it has to land inside the options.
pub fn validate_questions(questions: &[Question]) -> AppResult<()> {
    if questions.is_empty() {
        return Err(AppError::ValidationError(
            "A quiz must have at least one question".to_string(),
        ));
    }

    for (index, question) in questions.iter().enumerate() {
        if question.question_text.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Question {} is missing its text",
                index + 1
            )));
        }
        if question.options.len() < 2 {
            return Err(AppError::ValidationError(format!(
                "Question {} needs at least two options",
                index + 1
            )));
        }
        if question.options.iter().any(|option| option.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Question {} has an empty option",
                index + 1
            )));
        }
        if !question.correct_index_in_range() {
            return Err(AppError::ValidationError(format!(
                "Question {} has a correct option index out of bounds",
                index + 1
            )));
        }
    }

    Ok(())
}
