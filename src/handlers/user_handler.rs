use actix_web::{delete, get, patch, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{request::UpdateRoleRequest, response::MessageResponse},
};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

#[get("/me")]
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.get_profile(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[get("/admin/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[patch("/admin/user/{id}")]
pub async fn update_user_role(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateRoleRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state
        .user_service
        .update_role(&auth.0.sub, &id, request.role)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User role updated successfully")))
}

#[delete("/admin/user/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.user_service.delete_user(&auth.0.sub, &id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "User and associated results deleted successfully",
    )))
}
