use blockify_transcribe_interface::{Transcript, TranscriptRequest};

pub const DEFAULT_API_BASE: &str = "https://api.assemblyai.com/v2";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Default)]
pub struct ClientBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
}

impl ClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn build(self) -> Client {
        Client {
            http: reqwest::Client::new(),
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key: self.api_key.expect("api_key is required"),
        }
    }
}

/// Batch transcription client: submit a job, then poll its status until the
/// service reports a terminal state. Polling cadence is the caller's concern.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub async fn submit(&self, request: &TranscriptRequest) -> Result<String, Error> {
        let response = self
            .http
            .post(format!("{}/transcript", self.api_base))
            .header("authorization", &self.api_key)
            .json(request)
            .send()
            .await?;

        let transcript: Transcript = expect_success(response).await?.json().await?;

        tracing::info!(job_id = %transcript.id, "transcription_submitted");
        Ok(transcript.id)
    }

    pub async fn status(&self, job_id: &str) -> Result<Transcript, Error> {
        let response = self
            .http
            .get(format!("{}/transcript/{}", self.api_base, job_id))
            .header("authorization", &self.api_key)
            .send()
            .await?;

        let transcript: Transcript = expect_success(response).await?.json().await?;

        tracing::debug!(job_id = %transcript.id, status = %transcript.status, "transcription_status");
        Ok(transcript)
    }
}

async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::UnexpectedStatus { status, body })
}

#[cfg(test)]
mod tests {
    use blockify_transcribe_interface::JobStatus;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .api_base(server.uri())
            .api_key("test-token")
            .build()
    }

    #[tokio::test]
    async fn submit_posts_request_and_returns_job_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/transcript"))
            .and(header("authorization", "test-token"))
            .and(body_partial_json(serde_json::json!({
                "audio_url": "https://example.com/audio.wav",
                "speaker_labels": true,
                "iab_categories": true,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "job-42",
                "status": "queued",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let job_id = client
            .submit(&TranscriptRequest::new("https://example.com/audio.wav"))
            .await
            .unwrap();

        assert_eq!(job_id, "job-42");
    }

    #[tokio::test]
    async fn status_returns_the_full_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transcript/job-42"))
            .and(header("authorization", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "job-42",
                "status": "completed",
                "text": "Hello.",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let transcript = client.status("job-42").await.unwrap();

        assert_eq!(transcript.status, JobStatus::Completed);
        assert_eq!(transcript.text.as_deref(), Some("Hello."));
    }

    #[tokio::test]
    async fn non_success_status_surfaces_the_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/transcript"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "bad token"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .submit(&TranscriptRequest::new("https://example.com/a.wav"))
            .await
            .unwrap_err();

        match err {
            Error::UnexpectedStatus { status, body } => {
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert!(body.contains("bad token"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
