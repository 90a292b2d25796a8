use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use api_blockify::AppState;
use blockify_blockifier::{Blockifier, BlockifierConfig, BlobStore, ServiceError, Transcriber};
use blockify_transcribe_interface::{Transcript, TranscriptRequest};

struct MemoryStore;

impl BlobStore for MemoryStore {
    async fn put(&self, _bytes: Vec<u8>, extension: &str) -> Result<String, ServiceError> {
        Ok(format!("object.{extension}"))
    }

    async fn presign_get(&self, key: &str, _ttl: Duration) -> Result<String, ServiceError> {
        Ok(format!("https://blobs.test/{key}"))
    }
}

struct ScriptedTranscriber {
    statuses: Mutex<VecDeque<Transcript>>,
}

impl ScriptedTranscriber {
    fn with_statuses(statuses: impl IntoIterator<Item = Transcript>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into_iter().collect()),
        }
    }
}

impl Transcriber for ScriptedTranscriber {
    async fn submit(&self, _request: &TranscriptRequest) -> Result<String, ServiceError> {
        Ok("job-1".to_string())
    }

    async fn status(&self, _job_id: &str) -> Result<Transcript, ServiceError> {
        Ok(self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .expect("status polled more times than scripted"))
    }
}

fn completed(text: &str) -> Transcript {
    serde_json::from_value(serde_json::json!({
        "id": "job-1",
        "status": "completed",
        "text": text,
        "utterances": [{"text": text, "speaker": "A", "words": []}],
    }))
    .unwrap()
}

fn app(transcriber: ScriptedTranscriber) -> axum::Router {
    let config = BlockifierConfig {
        retry_timeout_secs: 0,
        max_retries: 2,
        ..Default::default()
    };
    api_blockify::router(AppState::new(Blockifier::new(
        MemoryStore,
        transcriber,
        config,
    )))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn blockify_returns_the_document() {
    let app = app(ScriptedTranscriber::with_statuses([completed("Hello.")]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/blockify")
                .header("content-type", "audio/wav")
                .body(Body::from(vec![0u8; 8]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["text"], "Hello.");
    assert_eq!(json["tags"][0]["kind"], "speaker");
    assert_eq!(json["tags"][0]["name"], "A");
}

#[tokio::test]
async fn unsupported_content_type_is_415() {
    let app = app(ScriptedTranscriber::with_statuses([]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/blockify")
                .header("content-type", "application/pdf")
                .body(Body::from(vec![0u8; 8]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "unsupported_media_type");
}

#[tokio::test]
async fn empty_body_is_400() {
    let app = app(ScriptedTranscriber::with_statuses([]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/blockify")
                .header("content-type", "audio/wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn job_endpoint_resumes_by_id() {
    let app = app(ScriptedTranscriber::with_statuses([completed("Resumed.")]));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/jobs/job-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["text"], "Resumed.");
}

#[tokio::test]
async fn timeout_maps_to_gateway_timeout() {
    let pending: Transcript = serde_json::from_value(serde_json::json!({
        "id": "job-1",
        "status": "processing",
    }))
    .unwrap();
    let app = app(ScriptedTranscriber::with_statuses([
        pending.clone(),
        pending,
    ]));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/jobs/job-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "transcription_timeout");
}
