use crate::services::ServiceError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "unsupported media type {mime:?}; supported types: {}",
        blockify_audio_mime::SUPPORTED_MIME_TYPES.join(", ")
    )]
    UnsupportedMedia { mime: String },

    #[error("transcription job failed: {detail}")]
    TranscriptionFailed { detail: String },

    #[error("transcription still pending after {attempts} poll attempts")]
    TranscriptionTimeout { attempts: u32 },

    #[error(transparent)]
    Mapping(#[from] blockify_transcript_tags::Error),

    #[error("blob store error: {0}")]
    Store(#[source] ServiceError),

    #[error("transcriber error: {0}")]
    Transcriber(#[source] ServiceError),
}
