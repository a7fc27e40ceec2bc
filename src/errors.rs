use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repositories::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not authenticated")]
    Authentication,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    /// 刪除 shift 的錯誤只回 `{error}`, 跟其他路徑不同
    #[error("{0}")]
    NotFoundBare(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{context}: {source}")]
    InternalBare {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Message {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Bare {
        error: String,
    },
}

impl AppError {
    pub fn internal(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Internal { context, source }
    }

    pub fn internal_bare(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::InternalBare { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Authentication | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) | AppError::NotFoundBare(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } | AppError::InternalBare { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::Internal { context, source } => ErrorBody::Message {
                message: context.to_string(),
                error: Some(source.to_string()),
            },
            AppError::InternalBare { context, .. } => ErrorBody::Bare {
                error: context.to_string(),
            },
            AppError::NotFoundBare(message) => ErrorBody::Bare {
                error: message.to_string(),
            },
            other => ErrorBody::Message {
                message: other.to_string(),
                error: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{} {}", status_code, self);
        }

        (status_code, Json(self.body())).into_response()
    }
}
