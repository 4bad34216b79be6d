use std::{collections::HashMap, sync::Arc};

use crate::{
    auth::require_other_user,
    errors::{AppError, AppResult},
    models::{
        domain::UserRole,
        dto::response::{ProfileResponse, ResultView, UserView},
    },
    repositories::{QuizRepository, ResultRepository, UserRepository},
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        quizzes: Arc<dyn QuizRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            users,
            quizzes,
            results,
        }
    }

    /// The user (sans hash) plus their result history joined with quiz titles,
    /// newest first. A result whose quiz vanished mid-request is skipped.
    pub async fn get_profile(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let results = self.results.find_by_user(user_id).await?;

        let mut titles: HashMap<String, String> = HashMap::new();
        let mut views = Vec::with_capacity(results.len());
        for result in results {
            let title = match titles.get(&result.quiz_id).cloned() {
                Some(title) => title,
                None => match self.quizzes.find_by_id(&result.quiz_id).await? {
                    Some(quiz) => {
                        titles.insert(result.quiz_id.clone(), quiz.title.clone());
                        quiz.title
                    }
                    None => continue,
                },
            };
            views.push(ResultView::new(result, &title));
        }

        Ok(ProfileResponse {
            user: user.into(),
            results: views,
        })
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }

    /// Role change by an admin. The actor must target somebody else.
    pub async fn update_role(
        &self,
        actor_id: &str,
        target_id: &str,
        role: UserRole,
    ) -> AppResult<()> {
        require_other_user(actor_id, target_id)?;
        self.users.update_role(target_id, role).await
    }

    /// Deletes the target account and its Results. Results go first, so a
    /// failure between the two steps never leaves orphaned ledger entries.
    pub async fn delete_user(&self, actor_id: &str, target_id: &str) -> AppResult<u64> {
        require_other_user(actor_id, target_id)?;

        if self.users.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let removed_results = self.results.delete_by_user(target_id).await?;
        self.users.delete(target_id).await?;

        log::info!(
            "Deleted user '{}' and {} associated result(s)",
            target_id,
            removed_results
        );

        Ok(removed_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::QuizResult,
        repositories::{MockQuizRepository, MockResultRepository, MockUserRepository},
        test_utils::fixtures::{capitals_quiz, test_user},
    };

    #[actix_web::test]
    async fn test_get_profile_joins_quiz_titles() {
        let user = test_user("alice");
        let user_id = user.id.clone();
        let quiz = capitals_quiz("admin-1");
        let quiz_id = quiz.id.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));

        let result = QuizResult::new(&user_id, &quiz_id, 1, 1);
        let mut results = MockResultRepository::new();
        results
            .expect_find_by_user()
            .returning(move |_| Ok(vec![result.clone()]));

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        let profile = service.get_profile(&user_id).await.unwrap();

        assert_eq!(profile.user.username, "alice");
        assert_eq!(profile.results.len(), 1);
        assert_eq!(profile.results[0].quiz_title, "Capitals");
        assert_eq!(profile.results[0].score, 1);
    }

    #[actix_web::test]
    async fn test_get_profile_skips_results_of_deleted_quizzes() {
        let user = test_user("alice");
        let user_id = user.id.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_by_id().returning(|_| Ok(None));

        let orphan = QuizResult::new(&user_id, "gone", 1, 1);
        let mut results = MockResultRepository::new();
        results
            .expect_find_by_user()
            .returning(move |_| Ok(vec![orphan.clone()]));

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        let profile = service.get_profile(&user_id).await.unwrap();

        assert!(profile.results.is_empty());
    }

    #[actix_web::test]
    async fn test_update_role_blocks_self() {
        let users = MockUserRepository::new();
        let quizzes = MockQuizRepository::new();
        let results = MockResultRepository::new();

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        let result = service
            .update_role("admin-1", "admin-1", UserRole::User)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[actix_web::test]
    async fn test_update_role_on_other_user_succeeds() {
        let mut users = MockUserRepository::new();
        users.expect_update_role().returning(|_, _| Ok(()));
        let quizzes = MockQuizRepository::new();
        let results = MockResultRepository::new();

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        assert!(service
            .update_role("admin-1", "user-2", UserRole::Admin)
            .await
            .is_ok());
    }

    #[actix_web::test]
    async fn test_delete_user_blocks_self() {
        let users = MockUserRepository::new();
        let quizzes = MockQuizRepository::new();
        let results = MockResultRepository::new();

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        let result = service.delete_user("admin-1", "admin-1").await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[actix_web::test]
    async fn test_delete_user_cascades_results() {
        let target = test_user("bob");
        let target_id = target.id.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(target.clone())));
        users.expect_delete().times(1).returning(|_| Ok(()));
        let quizzes = MockQuizRepository::new();
        let mut results = MockResultRepository::new();
        results.expect_delete_by_user().times(1).returning(|_| Ok(3));

        let service = UserService::new(Arc::new(users), Arc::new(quizzes), Arc::new(results));
        let removed = service.delete_user("admin-1", &target_id).await.unwrap();

        assert_eq!(removed, 3);
    }
}
