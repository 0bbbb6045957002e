use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Every failure a handler can return. Bodies are plain text and 500-class
/// causes are logged, never sent.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("DB error")]
    Database(anyhow::Error),

    #[error("{message}")]
    Upstream {
        message: &'static str,
        cause: anyhow::Error,
    },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn upstream(message: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        Self::Upstream {
            message,
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) | Self::Upstream { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {:#}", e),
            Self::Upstream { message, cause } => tracing::error!("{}: {:#}", message, cause),
            Self::Internal(e) => tracing::error!("Application error: {:?}", e),
            _ => {}
        }
        (self.status(), self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
