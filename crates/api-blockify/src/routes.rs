use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};

use blockify_blockifier::{BlobStore, Transcriber};
use blockify_transcript_tags::Document;

use crate::error::ApiError;
use crate::AppState;

pub(crate) async fn blockify<S: BlobStore + 'static, T: Transcriber + 'static>(
    State(state): State<AppState<S, T>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Document>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("request body is empty".to_string()));
    }

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    tracing::info!(
        content_type = %content_type,
        body_size_bytes = %body.len(),
        "blockify_request_received"
    );

    let document = state.blockifier.process(body.to_vec(), content_type).await?;
    Ok(Json(document))
}

pub(crate) async fn job<S: BlobStore + 'static, T: Transcriber + 'static>(
    State(state): State<AppState<S, T>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    tracing::info!(job_id = %id, "job_status_request_received");

    let document = state.blockifier.resume(&id).await?;
    Ok(Json(document))
}
