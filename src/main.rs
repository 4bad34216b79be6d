use actix_web::{middleware::Logger, web, App, HttpServer};

use quizmaster_server::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false) {
        config.validate_for_production();
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    // Without a reachable store there is nothing to serve
    let state = AppState::new(config)
        .await
        .expect("failed to connect to MongoDB");

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            .app_data(web::Data::from(state.config.clone()))
            .wrap(Logger::default())
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::logout)
            .service(handlers::health_check)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::me)
                    .service(handlers::list_quizzes)
                    .service(handlers::get_quiz)
                    .service(handlers::submit_quiz)
                    .service(handlers::create_quiz)
                    .service(handlers::update_quiz)
                    .service(handlers::delete_quiz)
                    .service(handlers::list_users)
                    .service(handlers::update_user_role)
                    .service(handlers::delete_user),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
