use crate::auth::password;
use crate::models::domain::{Question, Quiz, User, UserRole};
use crate::models::dto::request::RegisterRequest;

pub mod fixtures {
    use super::*;

    /// A user with a placeholder hash, for tests that never verify it.
    pub fn test_user(username: &str) -> User {
        User::new(
            username,
            &format!("{}@example.com", username),
            "unverifiable-placeholder-hash",
            UserRole::User,
        )
    }

    pub fn test_admin(username: &str) -> User {
        User::new(
            username,
            &format!("{}@example.com", username),
            "unverifiable-placeholder-hash",
            UserRole::Admin,
        )
    }

    /// A user whose stored hash really matches `password`. Slow (argon2);
    /// reserve for tests that exercise credential verification.
    pub fn test_user_with_password(username: &str, email: &str, password: &str) -> User {
        let hash = password::hash_password(password).expect("hashing test password should succeed");
        User::new(username, email, &hash, UserRole::User)
    }

    pub fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw123".to_string(),
            role: None,
        }
    }

    /// The one-question "Capitals" quiz: Paris, Lyon, Rome, correct answer 0.
    pub fn capitals_quiz(created_by: &str) -> Quiz {
        Quiz::new(
            "Capitals",
            Some("European capitals".to_string()),
            vec![Question {
                question_text: "Capital of France?".to_string(),
                options: vec!["Paris".to_string(), "Lyon".to_string(), "Rome".to_string()],
                correct_option_index: 0,
            }],
            created_by,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_capitals_quiz_shape() {
        let quiz = capitals_quiz("admin-1");

        assert_eq!(quiz.title, "Capitals");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].options.len(), 3);
        assert!(quiz.questions[0].correct_index_in_range());
    }

    #[test]
    fn test_fixture_roles() {
        assert!(test_admin("root").is_admin());
        assert!(!test_user("alice").is_admin());
    }
}
