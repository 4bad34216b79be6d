use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{expired_session_cookie, session_cookie},
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::{LoginResponse, MessageResponse},
    },
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.auth_service.register(request.into_inner()).await?;

    log::info!("Registered user '{}'", user.username);

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.auth_service.login(request.into_inner()).await?;
    let token = state.jwt_service.create_token(&user)?;

    let cookie = session_cookie(
        token,
        state.jwt_service.expiration_hours(),
        state.config.cookie_secure,
    );

    log::info!("User '{}' logged in", user.username);

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        message: "Login successful".to_string(),
        role: user.role,
        user_id: user.id,
        username: user.username,
    }))
}

/// Stateless tokens cannot be revoked server-side; logging out means telling
/// the client to drop the cookie.
#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .cookie(expired_session_cookie(state.config.cookie_secure))
        .json(MessageResponse::new("Logged out successfully")))
}
