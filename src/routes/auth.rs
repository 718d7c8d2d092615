/// Authentication Routes
///
/// Handles user signup and login.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::error::{AppError, ErrorContext};
use crate::models::{LoginCommand, SignupCommand};
use crate::services::AuthService;

/// POST /auth/signup
///
/// Register a new user with name, email, and password.
/// No token is issued on signup.
///
/// # Errors
/// - 400: Validation errors (short name, invalid email, empty password)
/// - 400: Email already registered (duplicate)
/// - 500: Internal server error
pub async fn signup(
    body: web::Json<Value>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("user_signup");

    let cmd = SignupCommand::parse(&body)?;
    let confirmation = auth.signup(cmd).await?;

    tracing::info!(
        request_id = %context.request_id,
        "User signed up successfully"
    );

    Ok(HttpResponse::Created().json(confirmation))
}

/// POST /auth/login
///
/// Authenticate a user with email and password.
/// Returns a bearer token bound to the user's email on success.
///
/// # Errors
/// - 400: Validation error (invalid email format, short password) or wrong
///   password for an existing account
/// - 401: No account with that email
/// - 500: Internal server error
pub async fn login(
    body: web::Json<Value>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("user_login");

    let cmd = LoginCommand::parse(&body)?;
    let confirmation = auth.login(cmd).await?;

    tracing::info!(
        request_id = %context.request_id,
        "User logged in successfully"
    );

    Ok(HttpResponse::Created().json(confirmation))
}
