/// Resource services
///
/// Business rules layered on top of raw persistence: existence checks, the
/// empty-result policy, post-update re-fetch, and delete confirmation.
/// Services receive their repositories through the constructor; the
/// composition root in `startup` wires them together.

mod auth;
mod drugs;
mod vaccination;

pub use auth::AuthService;
pub use drugs::DrugsService;
pub use vaccination::VaccinationService;

use serde::Serialize;

/// Confirmation returned by signup.
#[derive(Debug, Serialize)]
pub struct SignupConfirmation {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

/// Confirmation returned by login, carrying the issued bearer token.
#[derive(Debug, Serialize)]
pub struct LoginConfirmation {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub token: String,
    pub email: String,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub data: AffectedRows,
}

/// Raw affected-row count of a storage write.
#[derive(Debug, Serialize)]
pub struct AffectedRows {
    pub affected: u64,
}
