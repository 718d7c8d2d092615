use crate::auth::{generate_token, hash_password, verify_password};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError, ValidationError};
use crate::models::{LoginCommand, SignupCommand};
use crate::repository::UserRepository;
use crate::services::{LoginConfirmation, SignupConfirmation};

/// Orchestrates signup (uniqueness check + hash + persist) and login
/// (lookup + hash compare + token issue). Holds no state of its own beyond
/// the user repository and the token settings.
pub struct AuthService {
    users: UserRepository,
    jwt: JwtSettings,
}

impl AuthService {
    pub fn new(users: UserRepository, jwt: JwtSettings) -> Self {
        Self { users, jwt }
    }

    /// Registers a new user. Writes exactly one row; no token is issued.
    pub async fn signup(&self, cmd: SignupCommand) -> Result<SignupConfirmation, AppError> {
        // An empty password must never reach the persistence layer.
        if cmd.password.is_empty() {
            return Err(ValidationError::single("password", "Password cannot be empty").into());
        }

        if self.users.find_by_email(&cmd.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&cmd.password)?;
        let user = self
            .users
            .insert(&cmd.name, &cmd.email, &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(SignupConfirmation {
            status_code: 201,
            message: "User successfully signed up".to_string(),
        })
    }

    /// Authenticates a user and issues a bearer token bound to their email.
    /// Writes nothing.
    pub async fn login(&self, cmd: LoginCommand) -> Result<LoginConfirmation, AppError> {
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .ok_or(AppError::Auth(AuthError::InvalidCredentials))?;

        if !verify_password(&cmd.password, &user.password_hash)? {
            return Err(ValidationError::single("password", "Invalid password").into());
        }

        let token = generate_token(&user.email, &self.jwt)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginConfirmation {
            status_code: 201,
            message: "User successfully logged in".to_string(),
            token,
            email: user.email,
        })
    }
}
