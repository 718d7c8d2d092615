/// Middleware module
///
/// The JWT access guard for protected scopes and the request logger.

mod jwt_middleware;
mod request_logger;

pub use jwt_middleware::JwtMiddleware;
pub use request_logger::RequestLogger;
