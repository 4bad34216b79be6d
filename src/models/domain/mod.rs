pub mod quiz;
pub mod result;
pub mod user;

pub use quiz::{Question, Quiz};
pub use result::QuizResult;
pub use user::{User, UserRole};
