use std::future::Future;
use std::time::Duration;

use blockify_transcribe_interface::{Transcript, TranscriptRequest};

pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Object storage the pipeline writes audio into. `put` owns key generation
/// (time- and randomness-qualified) and returns the chosen key; the pipeline
/// only supplies the file extension as a hint.
pub trait BlobStore: Send + Sync {
    fn put(
        &self,
        bytes: Vec<u8>,
        extension: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn presign_get(
        &self,
        key: &str,
        ttl: Duration,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;
}

/// Remote transcription service: submit a job by URL, then poll its status.
pub trait Transcriber: Send + Sync {
    fn submit(
        &self,
        request: &TranscriptRequest,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn status(&self, job_id: &str) -> impl Future<Output = Result<Transcript, ServiceError>> + Send;
}

impl BlobStore for blockify_s3::Client {
    async fn put(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ServiceError> {
        let key = blockify_s3::object_key(extension);
        blockify_s3::Client::put(self, &key, bytes).await?;
        Ok(key)
    }

    async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, ServiceError> {
        Ok(blockify_s3::Client::presign_get(self, key, ttl).await?)
    }
}

impl Transcriber for blockify_transcribe_assemblyai::Client {
    async fn submit(&self, request: &TranscriptRequest) -> Result<String, ServiceError> {
        Ok(blockify_transcribe_assemblyai::Client::submit(self, request).await?)
    }

    async fn status(&self, job_id: &str) -> Result<Transcript, ServiceError> {
        Ok(blockify_transcribe_assemblyai::Client::status(self, job_id).await?)
    }
}
