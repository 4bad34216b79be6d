use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// Name of the HTTP-only cookie carrying the session JWT. The token is never
/// exposed to client script and there is no bearer-token fallback.
pub const SESSION_COOKIE: &str = "token";

/// Session cookie holding a freshly issued token. `SameSite=None` requires
/// `Secure`, so cross-site cookies are only enabled alongside HTTPS.
pub fn session_cookie(token: String, max_age_hours: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .path("/")
        .secure(secure)
        .same_site(if secure { SameSite::None } else { SameSite::Lax })
        .max_age(Duration::hours(max_age_hours))
        .finish()
}

/// Immediately-expiring cookie used to clear the session on logout or when a
/// presented token fails validation.
pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .http_only(true)
        .path("/")
        .secure(secure)
        .same_site(if secure { SameSite::None } else { SameSite::Lax })
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_flags_development() {
        let cookie = session_cookie("abc".to_string(), 24, false);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_ne!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_session_cookie_flags_production() {
        let cookie = session_cookie("abc".to_string(), 24, true);

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let cookie = expired_session_cookie(false);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
