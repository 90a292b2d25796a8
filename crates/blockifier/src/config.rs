use blockify_transcribe_interface::TranscriptRequest;

fn default_speaker_detection() -> bool {
    true
}

fn default_enable_audio_intelligence() -> bool {
    true
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_max_retries() -> u32 {
    60
}

fn default_retry_timeout_secs() -> u64 {
    10
}

fn default_presign_ttl_secs() -> u64 {
    3600
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct BlockifierConfig {
    #[serde(default = "default_speaker_detection")]
    pub speaker_detection: bool,
    /// Toggles highlights, IAB categories, sentiment, chapters and entity
    /// detection together.
    #[serde(default = "default_enable_audio_intelligence")]
    pub enable_audio_intelligence: bool,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_timeout_secs")]
    pub retry_timeout_secs: u64,
    /// Must outlive the poll budget; the remote service fetches the audio
    /// from the presigned URL at its own pace.
    #[serde(default = "default_presign_ttl_secs")]
    pub presign_ttl_secs: u64,
}

impl Default for BlockifierConfig {
    fn default() -> Self {
        Self {
            speaker_detection: default_speaker_detection(),
            enable_audio_intelligence: default_enable_audio_intelligence(),
            language_code: default_language_code(),
            max_retries: default_max_retries(),
            retry_timeout_secs: default_retry_timeout_secs(),
            presign_ttl_secs: default_presign_ttl_secs(),
        }
    }
}

impl BlockifierConfig {
    pub fn transcript_request(&self, audio_url: String) -> TranscriptRequest {
        TranscriptRequest {
            audio_url,
            speaker_labels: self.speaker_detection,
            language_detection: true,
            auto_highlights: self.enable_audio_intelligence,
            iab_categories: self.enable_audio_intelligence,
            sentiment_analysis: self.enable_audio_intelligence,
            auto_chapters: self.enable_audio_intelligence,
            entity_detection: self.enable_audio_intelligence,
            language_code: (!self.language_code.is_empty())
                .then(|| self.language_code.clone()),
        }
    }
}
