use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum BotError {
    /// No live gateway connection.
    #[error("Discord bot not connected")]
    Disconnected,

    /// The gateway did not report ready within the connect timeout.
    #[error("Timed out waiting for the Discord gateway to become ready")]
    ReadyTimeout,

    /// The client task ended before the gateway reported ready.
    #[error("Discord client stopped before the gateway became ready")]
    ClosedBeforeReady,

    /// Error from Serenity. Boxed due to its size.
    #[error(transparent)]
    Gateway(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for BotError {
    fn from(err: serenity::Error) -> Self {
        BotError::Gateway(Box::new(err))
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        match self {
            Self::Disconnected => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
