pub mod auth_service;
pub mod grading_service;
pub mod quiz_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use grading_service::GradingService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
