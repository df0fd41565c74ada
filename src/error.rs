//! Relay errors
//!
//! Every failure on the `/solve_ode` path ends up here and is rendered as
//! `{"error": "..."}` with a matching status code. Messages are user-facing
//! and in Spanish, like the page that calls the endpoint.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;

use crate::config::API_KEY_ENV;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or malformed input from the caller.
    #[error("{0}")]
    Validation(String),
    /// The upstream credential is not configured.
    #[error("{0} no configurada en el servidor.")]
    Configuration(String),
    /// Transport failure or non-2xx status from the upstream API.
    #[error("Error al comunicarse con la API de DeepSeek: {0}")]
    Upstream(String),
    #[error("Error interno del servidor: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn missing_equation() -> Self {
        Self::Validation("No se proporcionó ninguna ecuación.".to_string())
    }

    pub fn invalid_body(detail: impl std::fmt::Display) -> Self {
        Self::Validation(format!("Cuerpo de la petición inválido: {}", detail))
    }

    pub fn missing_credential() -> Self {
        Self::Configuration(API_KEY_ENV.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON error body returned by every failing handler.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
