use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub role: UserRole,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.id.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user = User::new("johndoe", "john@example.com", "hash", UserRole::User);
        let claims = Claims::new(&user, 24);

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, UserRole::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_carry_admin_role() {
        let admin = User::new("root", "root@example.com", "hash", UserRole::Admin);
        let claims = Claims::new(&admin, 24);

        assert_eq!(claims.role, UserRole::Admin);
    }
}
