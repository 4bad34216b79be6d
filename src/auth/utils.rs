use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Admin-management operations must target a different account: an admin can
/// neither change their own role nor delete themselves through them.
pub fn require_other_user(actor_id: &str, target_id: &str) -> AppResult<()> {
    if actor_id == target_id {
        return Err(AppError::Forbidden(
            "Cannot perform this action on your own account".to_string(),
        ));
    }
    Ok(())
}
