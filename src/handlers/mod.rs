pub mod auth_handler;
pub mod quiz_handler;
pub mod user_handler;

pub use auth_handler::{login, logout, register};
pub use quiz_handler::{
    create_quiz, delete_quiz, get_quiz, list_quizzes, submit_quiz, update_quiz,
};
pub use user_handler::{delete_user, health_check, list_users, me, update_user_role};
