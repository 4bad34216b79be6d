use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuizRepository, MongoResultRepository, MongoUserRepository, QuizRepository,
        ResultRepository, UserRepository,
    },
    services::{AuthService, GradingService, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub grading_service: Arc<GradingService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;
        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let result_repository = Arc::new(MongoResultRepository::new(&db));
        result_repository.ensure_indexes().await?;

        let users: Arc<dyn UserRepository> = user_repository;
        let quizzes: Arc<dyn QuizRepository> = quiz_repository;
        let results: Arc<dyn ResultRepository> = result_repository;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self {
            auth_service: Arc::new(AuthService::new(users.clone())),
            user_service: Arc::new(UserService::new(
                users.clone(),
                quizzes.clone(),
                results.clone(),
            )),
            quiz_service: Arc::new(QuizService::new(quizzes.clone(), results.clone())),
            grading_service: Arc::new(GradingService::new(quizzes, results)),
            jwt_service,
            config: Arc::new(config),
            db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
