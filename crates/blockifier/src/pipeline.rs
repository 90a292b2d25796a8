use std::time::Duration;

use blockify_transcribe_interface::{JobStatus, Transcript};
use blockify_transcript_tags::{Document, MapOptions, document};

use crate::config::BlockifierConfig;
use crate::error::Error;
use crate::services::{BlobStore, Transcriber};

/// End-to-end pipeline: validate mime type, store the audio, presign it,
/// submit the transcription job, poll to a terminal state, map to a
/// `Document`.
pub struct Blockifier<S, T> {
    store: S,
    transcriber: T,
    config: BlockifierConfig,
}

impl<S: BlobStore, T: Transcriber> Blockifier<S, T> {
    pub fn new(store: S, transcriber: T, config: BlockifierConfig) -> Self {
        Self {
            store,
            transcriber,
            config,
        }
    }

    pub async fn process(&self, bytes: Vec<u8>, mime_type: &str) -> Result<Document, Error> {
        let job_id = self.submit_job(bytes, mime_type).await?;
        self.resume(&job_id).await
    }

    /// First half of `process`: upload + submit, returning the opaque job id.
    /// The caller may persist the id and finish later via `resume` — e.g.
    /// when the hosting system re-invokes the pipeline as a status check.
    pub async fn submit_job(&self, bytes: Vec<u8>, mime_type: &str) -> Result<String, Error> {
        let extension =
            blockify_audio_mime::extension_for(mime_type).ok_or_else(|| Error::UnsupportedMedia {
                mime: mime_type.to_string(),
            })?;

        let key = self
            .store
            .put(bytes, extension)
            .await
            .map_err(Error::Store)?;
        let audio_url = self
            .store
            .presign_get(&key, Duration::from_secs(self.config.presign_ttl_secs))
            .await
            .map_err(Error::Store)?;

        let request = self.config.transcript_request(audio_url);
        let job_id = self
            .transcriber
            .submit(&request)
            .await
            .map_err(Error::Transcriber)?;

        tracing::info!(job_id = %job_id, key = %key, "transcription_job_submitted");
        Ok(job_id)
    }

    /// Drive a previously submitted job to a `Document` from its id alone,
    /// without re-uploading the audio.
    pub async fn resume(&self, job_id: &str) -> Result<Document, Error> {
        let transcript = self.poll_to_terminal(job_id).await?;

        if transcript.status == JobStatus::Error {
            let detail = transcript
                .error
                .unwrap_or_else(|| "no detail provided".to_string());
            tracing::error!(job_id = %job_id, detail = %detail, "transcription_job_failed");
            return Err(Error::TranscriptionFailed { detail });
        }

        let options = MapOptions {
            speaker_detection: self.config.speaker_detection,
        };
        let mapped = document(&transcript, &options)?;

        tracing::info!(
            job_id = %job_id,
            tag_count = %mapped.tags.len(),
            text_len = %mapped.text.len(),
            "document_mapped"
        );
        Ok(mapped)
    }

    /// Fixed-interval polling, bounded by `max_retries`. No backoff: the
    /// remote job advances on its own schedule and re-checking early is
    /// harmless.
    async fn poll_to_terminal(&self, job_id: &str) -> Result<Transcript, Error> {
        let interval = Duration::from_secs(self.config.retry_timeout_secs);

        for attempt in 1..=self.config.max_retries {
            let transcript = self
                .transcriber
                .status(job_id)
                .await
                .map_err(Error::Transcriber)?;

            if transcript.status.is_terminal() {
                tracing::info!(job_id = %job_id, status = %transcript.status, "transcription_job_terminal");
                return Ok(transcript);
            }

            tracing::info!(
                job_id = %job_id,
                status = %transcript.status,
                attempt = %attempt,
                "transcription_job_pending"
            );
            tokio::time::sleep(interval).await;
        }

        Err(Error::TranscriptionTimeout {
            attempts: self.config.max_retries,
        })
    }
}
