pub mod claims;
pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod utils;

pub use claims::Claims;
pub use cookies::{expired_session_cookie, session_cookie, SESSION_COOKIE};
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use utils::{require_admin, require_other_user};
