use actix_web::{
    cookie::Cookie,
    http::{header, StatusCode},
    test, web, App, HttpResponse,
};
use secrecy::SecretString;

use quizmaster_server::{
    auth::{AuthMiddleware, AuthenticatedUser, JwtService, SESSION_COOKIE},
    config::Config,
    models::domain::{User, UserRole},
};

fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "quizmaster-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
        jwt_expiration_hours: 24,
        cookie_secure: false,
    }
}

async fn whoami(auth: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "sub": auth.0.sub,
        "role": auth.0.role,
    }))
}

macro_rules! protected_app {
    ($config:expr, $jwt:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($config))
                .app_data(web::Data::new($jwt))
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware)
                        .route("/whoami", web::get().to(whoami)),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn request_without_cookie_is_unauthorized() {
    let config = test_config();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let app = protected_app!(config, jwt_service);

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn valid_cookie_reaches_the_handler_with_claims() {
    let config = test_config();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let user = User::new("alice", "a@x.com", "hash", UserRole::User);
    let token = jwt_service.create_token(&user).unwrap();

    let app = protected_app!(config, jwt_service);

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sub"], user.id);
    assert_eq!(body["role"], "user");
}

#[actix_web::test]
async fn garbage_cookie_is_unauthorized_and_cleared() {
    let config = test_config();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let app = protected_app!(config, jwt_service);

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new(SESSION_COOKIE, "garbage.token.value"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("invalid token should clear the session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[actix_web::test]
async fn expired_token_is_unauthorized() {
    let config = test_config();
    // Tokens from this service are already stale
    let expired_issuer = JwtService::new(&config.jwt_secret, -2);
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let user = User::new("alice", "a@x.com", "hash", UserRole::User);
    let token = expired_issuer.create_token(&user).unwrap();

    let app = protected_app!(config, jwt_service);

    let req = test::TestRequest::get()
        .uri("/whoami")
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
