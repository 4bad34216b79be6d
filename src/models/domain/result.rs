use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted record of a single quiz attempt's outcome. Append-only:
/// created once per submission, never mutated, removed only when the parent
/// user or quiz is deleted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score: u32,
    pub total: u32,
    pub created_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn new(user_id: &str, quiz_id: &str, score: u32, total: u32) -> Self {
        QuizResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score,
            total,
            created_at: Utc::now(),
        }
    }
}
