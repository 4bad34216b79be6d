use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{cookies::expired_session_cookie, Claims, JwtService, SESSION_COOKIE},
    config::Config,
    errors::{AppError, ErrorResponse},
};

/// Validates the session cookie and stores the claims in request extensions.
/// Routes wrapped by this middleware can rely on `AuthenticatedUser`.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let cookie_secure = req
                .app_data::<actix_web::web::Data<Config>>()
                .map(|config| config.cookie_secure)
                .unwrap_or(false);

            let Some(jwt_service) = req.app_data::<actix_web::web::Data<JwtService>>() else {
                return Ok(unauthorized(req, "JWT service not configured", None));
            };

            let Some(cookie) = req.cookie(SESSION_COOKIE) else {
                return Ok(unauthorized(req, "No token provided", None));
            };

            match jwt_service.validate_token(cookie.value()) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                // Clear the bad cookie so the client stops presenting it
                Err(_) => Ok(unauthorized(
                    req,
                    "Invalid or expired token",
                    Some(cookie_secure),
                )),
            }
        })
    }
}

fn unauthorized<B>(
    req: ServiceRequest,
    message: &str,
    clear_cookie_secure: Option<bool>,
) -> ServiceResponse<EitherBody<B>> {
    let mut builder = HttpResponse::Unauthorized();

    if let Some(secure) = clear_cookie_secure {
        builder.cookie(expired_session_cookie(secure));
    }

    let response = builder.json(ErrorResponse {
        error: format!("Unauthorized: {}", message),
        code: 401,
    });

    req.into_response(response).map_into_right_body()
}

// Extractor for authenticated user in handlers
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()));

        ready(claims.map(AuthenticatedUser))
    }
}
