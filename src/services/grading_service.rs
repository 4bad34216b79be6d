use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizResult},
        dto::request::SubmitAnswersRequest,
    },
    repositories::{QuizRepository, ResultRepository},
};

pub struct GradingService {
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl GradingService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, results: Arc<dyn ResultRepository>) -> Self {
        Self { quizzes, results }
    }

    /// Pure grading: one submitted option index per question, in order. A
    /// question scores iff its answer equals the correct option index;
    /// out-of-range or negative indices never match. No partial credit.
    pub fn grade(quiz: &Quiz, answers: &[i64]) -> AppResult<(u32, u32)> {
        if answers.len() != quiz.questions.len() {
            return Err(AppError::ValidationError(
                "Invalid answers array provided".to_string(),
            ));
        }

        let score = quiz
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, &answer)| answer == question.correct_option_index as i64)
            .count() as u32;

        Ok((score, quiz.questions.len() as u32))
    }

    /// Grades a submission and appends exactly one Result to the ledger.
    /// Resubmission is allowed; every submission gets its own record.
    pub async fn submit(
        &self,
        quiz_id: &str,
        user_id: &str,
        request: SubmitAnswersRequest,
    ) -> AppResult<QuizResult> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let (score, total) = Self::grade(&quiz, &request.answers)?;

        log::info!(
            "User '{}' scored {}/{} on quiz '{}'",
            user_id,
            score,
            total,
            quiz_id
        );

        self.results
            .create(QuizResult::new(user_id, quiz_id, score, total))
            .await
    }
}
