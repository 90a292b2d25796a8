use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pipeline(#[from] blockify_blockifier::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use blockify_blockifier::Error as Pipeline;

        let (status, code, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, "bad_request", message),
            Self::Pipeline(err) => {
                let (status, code) = match &err {
                    Pipeline::UnsupportedMedia { .. } => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
                    }
                    Pipeline::TranscriptionTimeout { .. } => {
                        (StatusCode::GATEWAY_TIMEOUT, "transcription_timeout")
                    }
                    Pipeline::TranscriptionFailed { .. } => {
                        (StatusCode::BAD_GATEWAY, "transcription_failed")
                    }
                    Pipeline::Transcriber(_) => (StatusCode::BAD_GATEWAY, "transcriber_error"),
                    Pipeline::Mapping(_) => (StatusCode::BAD_GATEWAY, "mapping_failed"),
                    Pipeline::Store(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error")
                    }
                };

                if status.is_server_error() {
                    tracing::error!(error = %err, code = %code, "blockify_request_failed");
                }

                (status, code, err.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
