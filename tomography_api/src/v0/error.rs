use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to connect to data store: {0}")]
    Connect(#[source] sqlx::Error),
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorMessage {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid query parameter `{field}`: {message}")]
    Validation { field: String, message: String },
    #[error(transparent)]
    QueryError(#[from] QueryError),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, message } => ErrorMessage {
                status_code: StatusCode::UNPROCESSABLE_ENTITY,
                message,
                field: Some(field),
            }
            .into_response(),
            ApiError::QueryError(e) => {
                match &e {
                    QueryError::Connect(e) => warn!(error = ?e, "data store connection failed"),
                    QueryError::Sql(e) => warn!(error = ?e, "sql error"),
                }
                ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, "internal server error"))
                    .into_response()
            }
        }
    }
}

fn serialize_status<S>(value: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(value.as_u16())
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
