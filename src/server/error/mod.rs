//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors and implements
//! `IntoResponse` so handlers can return `Result<impl IntoResponse, AppError>` and rely on
//! `?` for error propagation.

pub mod auth;
pub mod bot;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, bot::BotError, config::ConfigError},
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `BotError`) handle their own response mapping, while the
/// infrastructure variants all collapse into a logged 500 with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403/502 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Guild membership source error.
    ///
    /// Delegates to `BotError::into_response()`; a disconnected bot is a 400.
    #[error(transparent)]
    BotErr(#[from] BotError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Reason code appended to the post-login redirect when the OAuth callback fails.
    ///
    /// # Returns
    /// - `"access_denied"` - Discord reported an error (user declined consent)
    /// - `"invalid_request"` - Callback was missing `code` or `state`
    /// - `"state_mismatch"` - Returned state did not match the pending session state
    /// - `"auth_failed"` - Anything else, including upstream and storage failures
    pub fn login_failure_reason(&self) -> &'static str {
        match self {
            Self::AuthErr(AuthError::ProviderDenied(_)) => "access_denied",
            Self::AuthErr(AuthError::InvalidCallback) => "invalid_request",
            Self::AuthErr(AuthError::StateMismatch) => "state_mismatch",
            _ => "auth_failed",
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr` and `BotErr`, delegated to their own mapping
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BotErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
